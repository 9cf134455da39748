//! Settings passed from JavaScript

use autovalidate::Settings;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Overrides for [`Settings`], camelCase like the JavaScript options object.
/// Missing keys keep their defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsSettings {
    #[serde(default)]
    validation_message_attribute: Option<String>,
    #[serde(default)]
    default_validation_message_type: Option<String>,
    #[serde(default)]
    validation_message_container_class: Option<String>,
    #[serde(default)]
    validation_callback_attribute: Option<String>,
    #[serde(default)]
    default_callback_function: Option<String>,
    #[serde(default)]
    add_error_class: Option<bool>,
    #[serde(default)]
    general_error_message: Option<String>,
    #[serde(default)]
    rule_attribute: Option<String>,
    #[serde(default)]
    optional_class: Option<String>,
    #[serde(default)]
    error_class: Option<String>,
    #[serde(default)]
    no_error_class: Option<String>,
    #[serde(default)]
    custom_error_container_class: Option<String>,
}

impl JsSettings {
    fn apply(self, mut settings: Settings) -> Settings {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut settings.validation_message_attribute, self.validation_message_attribute);
        set(&mut settings.default_validation_message_type, self.default_validation_message_type);
        set(&mut settings.validation_message_container_class, self.validation_message_container_class);
        set(&mut settings.validation_callback_attribute, self.validation_callback_attribute);
        set(&mut settings.default_callback_function, self.default_callback_function);
        set(&mut settings.add_error_class, self.add_error_class);
        set(&mut settings.general_error_message, self.general_error_message);
        set(&mut settings.rule_attribute, self.rule_attribute);
        set(&mut settings.optional_class, self.optional_class);
        set(&mut settings.error_class, self.error_class);
        set(&mut settings.no_error_class, self.no_error_class);
        set(&mut settings.custom_error_container_class, self.custom_error_container_class);
        settings
    }
}

fn is_absent(options: &JsValue) -> bool {
    options.is_undefined() || options.is_null()
}

/// Defaults overlaid with the keys present in `options`
pub fn parse(options: &JsValue) -> Result<Settings, JsValue> {
    if is_absent(options) {
        return Ok(Settings::default());
    }
    let overrides: JsSettings = serde_wasm_bindgen::from_value(options.clone())
        .map_err(|e| JsValue::from_str(&format!("Failed to parse settings: {}", e)))?;
    Ok(overrides.apply(Settings::default()))
}

/// The `callback` function of `options`, if any
pub fn callback(options: &JsValue) -> Result<Option<js_sys::Function>, JsValue> {
    if is_absent(options) {
        return Ok(None);
    }
    let value = js_sys::Reflect::get(options, &JsValue::from_str("callback"))?;
    Ok(value.dyn_into::<js_sys::Function>().ok())
}

/// Look up a callback by name on the global object, like `window[name]`
pub fn global_callback(name: &str) -> Option<Option<bool>> {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
    let function = value.dyn_into::<js_sys::Function>().ok()?;
    Some(crate::rule::answer(function.call0(&JsValue::NULL)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_keep_defaults() {
        let overrides = JsSettings {
            add_error_class: Some(false),
            general_error_message: Some("Bitte Eingaben prüfen".to_string()),
            ..JsSettings::default()
        };
        let settings = overrides.apply(Settings::default());

        assert!(!settings.add_error_class);
        assert_eq!(settings.general_error_message, "Bitte Eingaben prüfen");
        assert_eq!(settings.validation_message_container_class, "validationMessages");
    }
}
