use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{ast::types::ExpressionType, errors::errors::{Error, ErrorImpl}, Position};

/// Allowed value types per property name. Properties without an entry are unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyRules(HashMap<String, Vec<ExpressionType>>);

impl PropertyRules {
    pub fn new() -> Self {
        PropertyRules(HashMap::new())
    }

    /// Allowed types for `property`, if it is constrained.
    pub fn get(&self, property: &str) -> Option<&[ExpressionType]> {
        self.0.get(property).map(|types| types.as_slice())
    }

    pub fn insert(&mut self, property: &str, types: Vec<ExpressionType>) {
        self.0.insert(String::from(property), types);
    }
}

impl Default for PropertyRules {
    fn default() -> Self {
        let mut rules = PropertyRules::new();
        rules.insert("color", vec![ExpressionType::Color]);
        rules.insert("background-color", vec![ExpressionType::Color]);
        rules.insert("width", vec![ExpressionType::Pixel, ExpressionType::Percentage]);
        rules.insert("height", vec![ExpressionType::Pixel, ExpressionType::Percentage]);
        rules
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub property_rules: PropertyRules,
    /// Deepest allowed nesting of stylerule, if and else bodies, parenthesised
    /// groups and unary minus.
    pub max_nesting_depth: usize,
    /// Most operations a single expression may stack, see `Expr::depth`.
    /// Long flat chains count toward it.
    pub max_expression_depth: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            property_rules: PropertyRules::default(),
            max_nesting_depth: 64,
            max_expression_depth: 256,
        }
    }
}

impl CompilerConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| config_error(format!("{}", e)))
    }

    /// Reads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .map_err(|e| config_error(format!("cannot read {}: {}", path.display(), e)))?;

        let config = CompilerConfig::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

fn config_error(message: String) -> Error {
    Error::new(ErrorImpl::ConfigError { message }, Position::null())
}
