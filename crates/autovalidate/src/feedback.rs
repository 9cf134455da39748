// File: src/feedback.rs
// Purpose: Turn a validation result into presentation steps

use autovalidate_core::ValidationResult;
use serde::Serialize;

use crate::config::Settings;
use crate::facts::FormFacts;

/// How a form presents its errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageMode {
    /// Show the shared message container and matching error containers
    #[default]
    Container,
    /// Raise a single alert
    Alert,
    /// Unknown mode: nothing is shown, submission is still blocked
    Silent,
}

impl MessageMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "container" => Self::Container,
            "alert" => Self::Alert,
            _ => Self::Silent,
        }
    }
}

/// An element to mark with the error class, plus the id its label points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorTarget {
    pub name: String,
    pub label_for: Option<String>,
}

/// Whether the form may be submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum SubmitGate {
    Block,
    /// Run the named callback; its answer decides
    Proceed { callback: String },
}

/// Presentation steps for one submit, in the order they apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Remove the error class from every element first
    pub clear_error_classes: bool,
    pub error_targets: Vec<ErrorTarget>,
    /// Hide the shared message container and all error containers first
    pub hide_containers: bool,
    /// Indexes into `FormFacts::error_containers` to show
    pub show_containers: Vec<usize>,
    pub show_message_container: bool,
    pub alert: Option<String>,
    pub gate: SubmitGate,
}

impl Feedback {
    pub fn blocks_submit(&self) -> bool {
        self.gate == SubmitGate::Block
    }
}

/// Plan the feedback for `result` on the form described by `facts`
pub fn plan_feedback(result: &ValidationResult, facts: &FormFacts, settings: &Settings) -> Feedback {
    let mark_errors = settings.add_error_class && !facts.opts_out_of_error_class;
    let container_mode = facts.message_mode == MessageMode::Container;

    let mut feedback = Feedback {
        clear_error_classes: mark_errors,
        error_targets: Vec::new(),
        hide_containers: container_mode,
        show_containers: Vec::new(),
        show_message_container: false,
        alert: None,
        gate: SubmitGate::Proceed {
            callback: facts.callback.clone(),
        },
    };

    if result.is_valid() {
        return feedback;
    }
    feedback.gate = SubmitGate::Block;

    if mark_errors {
        feedback.error_targets = result
            .names()
            .map(|name| ErrorTarget {
                name: name.to_string(),
                label_for: facts.ids_by_name.get(name).cloned(),
            })
            .collect();
    }

    match facts.message_mode {
        MessageMode::Container => {
            for failure in result {
                for container in facts.containers_for(&failure.element_name, &failure.error_kind) {
                    if !feedback.show_containers.contains(&container.index) {
                        feedback.show_containers.push(container.index);
                    }
                }
            }
            feedback.show_message_container = facts.has_message_container;
        }
        MessageMode::Alert => {
            feedback.alert = Some(alert_text(result, facts, settings));
        }
        MessageMode::Silent => {}
    }

    feedback
}

/// Text of the first failure that has its own message, else the general one
fn alert_text(result: &ValidationResult, facts: &FormFacts, settings: &Settings) -> String {
    let general = &settings.general_error_message;
    let mut text = general.clone();

    for failure in result {
        let containers = facts.containers_for(&failure.element_name, &failure.error_kind);
        if !containers.is_empty() {
            text = containers.iter().map(|c| c.text.as_str()).collect();
        }
        if &text != general {
            break;
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ErrorContainer;
    use rstest::rstest;

    fn container(index: usize, target: &str, kind: Option<&str>, text: &str) -> ErrorContainer {
        ErrorContainer {
            index,
            target: target.to_string(),
            error_kind: kind.map(str::to_string),
            text: text.to_string(),
        }
    }

    fn failing() -> ValidationResult {
        let mut result = ValidationResult::new();
        result.record("AGE", "input_number", "not a number");
        result.record("EMAIL", "input_email", "epost");
        result
    }

    #[rstest]
    #[case("container", MessageMode::Container)]
    #[case("alert", MessageMode::Alert)]
    #[case("inline", MessageMode::Silent)]
    #[case("", MessageMode::Silent)]
    fn test_parse_mode(#[case] value: &str, #[case] expected: MessageMode) {
        assert_eq!(MessageMode::parse(value), expected);
    }

    #[test]
    fn test_valid_form_proceeds() {
        let facts = FormFacts {
            callback: "submit".to_string(),
            ..FormFacts::default()
        };
        let feedback = plan_feedback(&ValidationResult::new(), &facts, &Settings::default());

        assert!(feedback.clear_error_classes);
        assert!(feedback.hide_containers);
        assert!(feedback.error_targets.is_empty());
        assert!(!feedback.show_message_container);
        assert_eq!(
            feedback.gate,
            SubmitGate::Proceed {
                callback: "submit".to_string()
            }
        );
    }

    #[test]
    fn test_container_mode() {
        let mut facts = FormFacts {
            has_message_container: true,
            error_containers: vec![
                container(0, "EMAIL", None, "Check your email"),
                container(1, "EMAIL", Some("epost"), "No epost"),
                container(2, "AGE", None, "Age must be a number"),
                container(3, "AGE", Some("empty"), "Age missing"),
            ],
            ..FormFacts::default()
        };
        facts.ids_by_name.insert("EMAIL".to_string(), "email-id".to_string());

        let feedback = plan_feedback(&failing(), &facts, &Settings::default());

        assert!(feedback.blocks_submit());
        assert_eq!(feedback.show_containers, vec![2, 1]);
        assert!(feedback.show_message_container);
        assert_eq!(feedback.alert, None);
        assert_eq!(
            feedback.error_targets,
            vec![
                ErrorTarget {
                    name: "AGE".to_string(),
                    label_for: None
                },
                ErrorTarget {
                    name: "EMAIL".to_string(),
                    label_for: Some("email-id".to_string())
                },
            ]
        );
    }

    #[test]
    fn test_error_class_disabled() {
        let settings = Settings {
            add_error_class: false,
            ..Settings::default()
        };
        let feedback = plan_feedback(&failing(), &FormFacts::default(), &settings);
        assert!(!feedback.clear_error_classes);
        assert!(feedback.error_targets.is_empty());
    }

    #[test]
    fn test_form_opts_out_of_error_class() {
        let facts = FormFacts {
            opts_out_of_error_class: true,
            ..FormFacts::default()
        };
        let feedback = plan_feedback(&failing(), &facts, &Settings::default());
        assert!(!feedback.clear_error_classes);
        assert!(feedback.error_targets.is_empty());
    }

    #[test]
    fn test_alert_uses_first_custom_message() {
        let facts = FormFacts {
            message_mode: MessageMode::Alert,
            error_containers: vec![
                container(0, "EMAIL", Some("epost"), "No epost addresses"),
                container(1, "EMAIL", None, "Check your email"),
            ],
            ..FormFacts::default()
        };
        let feedback = plan_feedback(&failing(), &facts, &Settings::default());

        assert_eq!(feedback.alert.as_deref(), Some("No epost addresses"));
        assert!(!feedback.hide_containers);
        assert!(feedback.show_containers.is_empty());
    }

    #[test]
    fn test_alert_falls_back_to_general_message() {
        let facts = FormFacts {
            message_mode: MessageMode::Alert,
            ..FormFacts::default()
        };
        let feedback = plan_feedback(&failing(), &facts, &Settings::default());
        assert_eq!(feedback.alert.as_deref(), Some("Please correct your input"));
    }

    #[test]
    fn test_silent_mode_blocks_without_messages() {
        let facts = FormFacts {
            message_mode: MessageMode::Silent,
            ..FormFacts::default()
        };
        let feedback = plan_feedback(&failing(), &facts, &Settings::default());
        assert!(feedback.blocks_submit());
        assert_eq!(feedback.alert, None);
        assert!(!feedback.hide_containers);
        assert!(feedback.show_containers.is_empty());
    }
}
