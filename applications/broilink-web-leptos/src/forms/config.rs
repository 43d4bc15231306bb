use std::collections::HashMap;

use super::fields::parse_config_value;
use super::FormError;
use crate::models::{ConfigField, FarmConfig};

/// Text of every farm configuration input, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDraft {
    inputs: HashMap<ConfigField, String>,
}

impl ConfigDraft {
    pub fn from_config(config: &FarmConfig) -> Self {
        Self {
            inputs: ConfigField::ALL
                .into_iter()
                .map(|field| (field, config.get(field).to_string()))
                .collect(),
        }
    }

    pub fn text(&self, field: ConfigField) -> String {
        self.inputs.get(&field).cloned().unwrap_or_default()
    }

    pub fn set_text(&mut self, field: ConfigField, text: String) {
        self.inputs.insert(field, text);
    }

    /// Parse every input on top of `base`, stopping at the first bad one
    pub fn to_config(&self, base: &FarmConfig) -> Result<FarmConfig, FormError> {
        let mut config = base.clone();
        for field in ConfigField::ALL {
            let value = parse_config_value(field.label(), &self.text(field))?;
            config.set(field, value);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_draft_reproduces_config() {
        let config = FarmConfig::default();
        let draft = ConfigDraft::from_config(&config);

        assert_eq!(draft.text(ConfigField::SuhuNormalMin), "28");
        assert_eq!(draft.to_config(&config).unwrap(), config);
    }

    #[test]
    fn test_edits_are_applied() {
        let config = FarmConfig::default();
        let mut draft = ConfigDraft::from_config(&config);
        draft.set_text(ConfigField::AmoniaMax, "22,5".into());

        let updated = draft.to_config(&config).unwrap();
        assert_eq!(updated.amonia_max, 22.5);
        assert_eq!(updated.peternak_id, config.peternak_id);
    }

    #[test]
    fn test_bad_input_names_the_field() {
        let config = FarmConfig::default();
        let mut draft = ConfigDraft::from_config(&config);
        draft.set_text(ConfigField::LuasKandang, "luas".into());

        assert_eq!(
            draft.to_config(&config),
            Err(FormError::NotANumber(ConfigField::LuasKandang.label()))
        );
    }
}
