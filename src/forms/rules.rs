// src/forms/rules.rs

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use validator::ValidateEmail;

/// Valor de um campo de formulário, já normalizado.
///
/// `Missing` cobre tanto campo ausente no payload quanto campo que o modelo
/// não conhece; para as regras ele se comporta como vazio.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl FieldValue {
    /// "Vazio" no sentido do `required`: string vazia, `false` e ausente
    /// contam como não preenchido. Número sempre conta como preenchido.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::Number(_) => false,
            FieldValue::Missing => true,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            // Aceita texto numérico ("42") para espelhar inputs de formulário
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<Option<String>> for FieldValue {
    fn from(s: Option<String>) -> Self {
        match s {
            Some(s) => FieldValue::Text(s),
            None => FieldValue::Missing,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// Validador cruzado: recebe o valor do próprio campo e o formulário inteiro.
pub type CustomFn<T> = Arc<dyn Fn(&FieldValue, &T) -> Option<String> + Send + Sync>;

/// Conjunto fechado de regras. É enum de propósito: o compilador garante
/// tratamento exaustivo de cada variante.
pub enum Rule<T> {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern { regex: Regex, message: String },
    Email,
    NumberRange { min: Option<f64>, max: Option<f64> },
    Custom(CustomFn<T>),
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "Required"),
            Rule::MinLength(n) => write!(f, "MinLength({n})"),
            Rule::MaxLength(n) => write!(f, "MaxLength({n})"),
            Rule::Pattern { regex, .. } => write!(f, "Pattern({})", regex.as_str()),
            Rule::Email => write!(f, "Email"),
            Rule::NumberRange { min, max } => write!(f, "NumberRange({min:?}, {max:?})"),
            Rule::Custom(_) => write!(f, "Custom"),
        }
    }
}

impl<T> Rule<T> {
    /// Avalia a regra. `None` = passou; `Some(msg)` = mensagem de erro.
    /// Nunca entra em pânico: falha de validação é dado, não exceção.
    pub fn evaluate(&self, label: &str, value: &FieldValue, all: &T) -> Option<String> {
        match self {
            Rule::Required => {
                if value.is_empty() {
                    Some(format!("O campo '{label}' é obrigatório."))
                } else {
                    None
                }
            }

            Rule::MinLength(min) => {
                let len = value.as_text().map_or(0, |s| s.chars().count());
                if len < *min {
                    Some(format!("O campo '{label}' deve ter no mínimo {min} caracteres."))
                } else {
                    None
                }
            }

            Rule::MaxLength(max) => {
                let len = value.as_text().map_or(0, |s| s.chars().count());
                if len > *max {
                    Some(format!("O campo '{label}' deve ter no máximo {max} caracteres."))
                } else {
                    None
                }
            }

            Rule::Pattern { regex, message } => match value.as_text() {
                Some(s) if regex.is_match(s) => None,
                _ => Some(message.clone()),
            },

            Rule::Email => match value.as_text() {
                Some(s) if s.validate_email() => None,
                _ => Some("E-mail inválido.".to_string()),
            },

            Rule::NumberRange { min, max } => {
                // Entrada não numérica sob regra numérica falha, por definição
                let Some(n) = value.as_number() else {
                    return Some(format!("O campo '{label}' deve ser um número."));
                };
                if let Some(min) = min {
                    if n < *min {
                        return Some(format!("O campo '{label}' deve ser no mínimo {min}."));
                    }
                }
                if let Some(max) = max {
                    if n > *max {
                        return Some(format!("O campo '{label}' deve ser no máximo {max}."));
                    }
                }
                None
            }

            Rule::Custom(f) => f(value, all),
        }
    }
}

/// Configuração de um campo: nome, rótulo exibido nas mensagens e as regras
/// na ordem em que serão avaliadas. O builder fixa a ordem canônica
/// (required -> tamanho -> padrão/e-mail -> faixa numérica -> custom); a
/// primeira regra que falhar fornece a mensagem do campo.
pub struct FieldConfig<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: Vec<Rule<T>>,
}

impl<T> FieldConfig<T> {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label, rules: Vec::new() }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.rules.push(Rule::MinLength(min));
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.rules.push(Rule::MaxLength(max));
        self
    }

    pub fn pattern(mut self, regex: Regex, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Pattern { regex, message: message.into() });
        self
    }

    pub fn email(mut self) -> Self {
        self.rules.push(Rule::Email);
        self
    }

    pub fn number_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.rules.push(Rule::NumberRange { min, max });
        self
    }

    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&FieldValue, &T) -> Option<String> + Send + Sync + 'static,
    {
        self.rules.push(Rule::Custom(Arc::new(f)));
        self
    }

    /// Primeiro erro na ordem declarada, ou `None` se tudo passou.
    /// Campo sem regras é sempre válido.
    pub fn validate(&self, value: &FieldValue, all: &T) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(self.label, value, all))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_and_false() {
        let field: FieldConfig<()> = FieldConfig::new("terms", "Termos").required();

        assert!(field.validate(&FieldValue::Text("".into()), &()).is_some());
        assert!(field.validate(&FieldValue::Text("   ".into()), &()).is_some());
        assert!(field.validate(&FieldValue::Bool(false), &()).is_some());
        assert!(field.validate(&FieldValue::Missing, &()).is_some());

        assert!(field.validate(&FieldValue::Text("ok".into()), &()).is_none());
        assert!(field.validate(&FieldValue::Bool(true), &()).is_none());
        assert!(field.validate(&FieldValue::Number(0.0), &()).is_none());
    }

    #[test]
    fn min_length_boundary_is_inclusive() {
        let field: FieldConfig<()> = FieldConfig::new("password", "Senha").min_length(8);

        assert!(field.validate(&"abcdefg".into(), &()).is_some());
        assert!(field.validate(&"abcdefgh".into(), &()).is_none());
        assert!(field.validate(&"abcdefghi".into(), &()).is_none());
    }

    #[test]
    fn max_length_boundary_is_inclusive() {
        let field: FieldConfig<()> = FieldConfig::new("sku", "SKU").max_length(4);

        assert!(field.validate(&"abcd".into(), &()).is_none());
        assert!(field.validate(&"abcde".into(), &()).is_some());
    }

    #[test]
    fn email_rule_rejects_malformed_address() {
        let field: FieldConfig<()> = FieldConfig::new("email", "E-mail").required().email();

        assert_eq!(
            field.validate(&"not-an-email".into(), &()),
            Some("E-mail inválido.".to_string())
        );
        assert_eq!(field.validate(&"user@example.com".into(), &()), None);
    }

    #[test]
    fn first_failing_rule_wins() {
        // required falha antes do e-mail: a mensagem tem que ser a do required
        let field: FieldConfig<()> = FieldConfig::new("email", "E-mail").required().email();

        let err = field.validate(&"".into(), &()).unwrap();
        assert!(err.contains("obrigatório"), "mensagem inesperada: {err}");
    }

    #[test]
    fn number_range_rejects_non_numeric_input() {
        let field: FieldConfig<()> =
            FieldConfig::new("qty", "Quantidade").number_range(Some(1.0), Some(100.0));

        assert!(field.validate(&"abc".into(), &()).is_some());
        assert!(field.validate(&FieldValue::Bool(true), &()).is_some());
        assert!(field.validate(&FieldValue::Number(0.5), &()).is_some());
        assert!(field.validate(&FieldValue::Number(101.0), &()).is_some());

        assert!(field.validate(&FieldValue::Number(1.0), &()).is_none());
        assert!(field.validate(&"42".into(), &()).is_none());
    }

    #[test]
    fn field_without_rules_is_always_valid() {
        let field: FieldConfig<()> = FieldConfig::new("notes", "Observações");
        assert!(field.validate(&FieldValue::Missing, &()).is_none());
        assert!(field.validate(&"".into(), &()).is_none());
    }

    #[test]
    fn pattern_rule_uses_custom_message() {
        let field: FieldConfig<()> = FieldConfig::new("phone", "Telefone").pattern(
            Regex::new(r"^\+?[0-9 ()-]{7,20}$").unwrap(),
            "Telefone inválido.",
        );

        assert_eq!(field.validate(&"abc".into(), &()), Some("Telefone inválido.".to_string()));
        assert_eq!(field.validate(&"+55 (71) 99999-0000".into(), &()), None);
    }
}
