// src/forms/state.rs

use std::collections::{HashMap, HashSet};

use crate::forms::rules::{FieldConfig, FieldValue};

/// Um tipo de formulário: sabe ler e escrever seus campos pelo nome.
///
/// A implementação é um `match` manual por campo. É verboso, mas fecha a
/// lista de campos em tempo de compilação junto com a config.
pub trait FormModel {
    fn get(&self, field: &str) -> FieldValue;

    /// Campo desconhecido ou tipo incompatível: ignora em silêncio.
    fn set(&mut self, field: &str, value: FieldValue);
}

/// Conjunto ordenado de campos de um formulário.
pub struct FormConfig<T> {
    fields: Vec<FieldConfig<T>>,
}

impl<T> FormConfig<T> {
    pub fn new(fields: Vec<FieldConfig<T>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldConfig<T>] {
        &self.fields
    }

    fn field(&self, name: &str) -> Option<&FieldConfig<T>> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Resultado de uma tentativa de submissão.
#[derive(Debug, PartialEq)]
pub enum Submission<R> {
    /// Algum campo falhou; o callback NÃO foi chamado e os erros estão
    /// visíveis (todos os campos foram marcados como tocados).
    Rejected,
    /// Todos os campos passaram e o callback completou com sucesso.
    Completed(R),
}

/// Estado de um formulário: valores, erros por campo, campos tocados e a
/// flag de submissão em andamento.
///
/// O estado pertence exclusivamente a quem o criou; não há compartilhamento
/// nem lock. `submitting` é consultivo: impede o botão de enviar de novo,
/// não impede uma segunda chamada programática.
pub struct FormState<T: FormModel + Clone> {
    config: FormConfig<T>,
    initial: T,
    values: T,
    errors: HashMap<&'static str, String>,
    touched: HashSet<&'static str>,
    submitting: bool,
}

impl<T: FormModel + Clone> FormState<T> {
    pub fn new(initial: T, config: FormConfig<T>) -> Self {
        Self {
            values: initial.clone(),
            initial,
            config,
            errors: HashMap::new(),
            touched: HashSet::new(),
            submitting: false,
        }
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Atualiza o valor e revalida SOMENTE esse campo. Os demais ficam como
    /// estão; uma regra `custom` de outro campo só será reavaliada quando o
    /// outro campo mudar ou no submit.
    pub fn set_value(&mut self, field: &str, value: FieldValue) {
        self.values.set(field, value);

        if let Some(cfg) = self.config.field(field) {
            let current = self.values.get(cfg.name);
            match cfg.validate(&current, &self.values) {
                Some(msg) => {
                    self.errors.insert(cfg.name, msg);
                }
                None => {
                    self.errors.remove(cfg.name);
                }
            }
        }
    }

    pub fn set_touched(&mut self, field: &str) {
        if let Some(cfg) = self.config.field(field) {
            self.touched.insert(cfg.name);
        }
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Último erro calculado para o campo (independente de tocado).
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Erro que a UI deve exibir: só aparece depois da primeira interação.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.touched.contains(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Erros atuais, prontos para virar o `details` de uma resposta 400.
    pub fn errors(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Calculado sob demanda, nunca armazenado: verdadeiro sse TODO campo
    /// configurado avalia sem erro contra os valores atuais.
    pub fn is_valid(&self) -> bool {
        self.config.fields().iter().all(|cfg| {
            let value = self.values.get(cfg.name);
            cfg.validate(&value, &self.values).is_none()
        })
    }

    /// Revalida todos os campos e preenche o mapa de erros.
    /// Retorna `true` se nenhum campo falhou.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        let mut errors = HashMap::new();
        for cfg in self.config.fields() {
            let value = self.values.get(cfg.name);
            if let Some(msg) = cfg.validate(&value, &self.values) {
                errors.insert(cfg.name, msg);
                ok = false;
            }
        }
        self.errors = errors;
        ok
    }

    /// Submissão guardada: marca tudo como tocado, revalida tudo e só chama
    /// o callback se nenhum campo falhar.
    ///
    /// `submitting` fica `true` durante o `await` e volta para `false` nos
    /// dois desfechos (equivalente a um `finally`); o `Err` do callback
    /// propaga intacto para quem chamou.
    pub async fn handle_submit<F, Fut, R, E>(&mut self, on_valid: F) -> Result<Submission<R>, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        for cfg in self.config.fields() {
            self.touched.insert(cfg.name);
        }

        if !self.validate_all() {
            return Ok(Submission::Rejected);
        }

        self.submitting = true;
        let result = on_valid(self.values.clone()).await;
        self.submitting = false;

        result.map(Submission::Completed)
    }

    /// Restaura os valores (para `new_values` ou para os iniciais) e limpa
    /// erros e tocados. Passando `Some`, a nova baseline vira o "inicial".
    pub fn reset(&mut self, new_values: Option<T>) {
        if let Some(values) = new_values {
            self.initial = values;
        }
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::forms::rules::FieldConfig;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Credentials {
        email: String,
        password: String,
        confirm_password: String,
    }

    impl FormModel for Credentials {
        fn get(&self, field: &str) -> FieldValue {
            match field {
                "email" => self.email.clone().into(),
                "password" => self.password.clone().into(),
                "confirmPassword" => self.confirm_password.clone().into(),
                _ => FieldValue::Missing,
            }
        }

        fn set(&mut self, field: &str, value: FieldValue) {
            let FieldValue::Text(text) = value else { return };
            match field {
                "email" => self.email = text,
                "password" => self.password = text,
                "confirmPassword" => self.confirm_password = text,
                _ => {}
            }
        }
    }

    fn credentials_form() -> FormConfig<Credentials> {
        FormConfig::new(vec![
            FieldConfig::new("email", "E-mail").required().email(),
            FieldConfig::new("password", "Senha").min_length(8),
            FieldConfig::new("confirmPassword", "Confirmação").custom(|value, all: &Credentials| {
                match value {
                    FieldValue::Text(s) if *s == all.password => None,
                    _ => Some("As senhas não conferem.".to_string()),
                }
            }),
        ])
    }

    #[test]
    fn cross_field_confirmation_scenario() {
        let mut form = FormState::new(Credentials::default(), credentials_form());

        form.set_value("password", "abcdefgh".into());
        form.set_value("confirmPassword", "abcdefg".into());
        assert_eq!(form.error("confirmPassword"), Some("As senhas não conferem."));

        form.set_value("confirmPassword", "abcdefgh".into());
        assert_eq!(form.error("confirmPassword"), None);
    }

    #[test]
    fn errors_are_hidden_until_touched() {
        let mut form = FormState::new(Credentials::default(), credentials_form());

        form.set_value("email", "not-an-email".into());
        assert!(form.error("email").is_some());
        assert_eq!(form.visible_error("email"), None);

        form.set_touched("email");
        assert_eq!(form.visible_error("email"), Some("E-mail inválido."));
    }

    #[test]
    fn is_valid_matches_computed_errors_after_any_sequence() {
        let mut form = FormState::new(Credentials::default(), credentials_form());

        // e-mail vazio é obrigatório, então o formulário nasce inválido
        assert!(!form.is_valid());

        form.set_value("email", "user@example.com".into());
        form.set_value("password", "abcdefgh".into());
        form.set_value("confirmPassword", "abcdefgh".into());
        assert!(form.is_valid());

        form.set_value("password", "curta".into());
        assert!(!form.is_valid());

        form.set_value("password", "abcdefgh".into());
        // confirmPassword ainda bate com o valor atual, então volta a valer
        assert!(form.is_valid());
    }

    #[test]
    fn reset_reproduces_fresh_state() {
        let config_a = credentials_form();
        let config_b = credentials_form();

        let mut reused = FormState::new(Credentials::default(), config_a);
        reused.set_value("email", "x".into());
        reused.set_touched("email");
        reused.reset(None);

        let mut fresh = FormState::new(Credentials::default(), config_b);

        // Mesma sequência nos dois: erros idênticos
        reused.set_value("email", "not-an-email".into());
        fresh.set_value("email", "not-an-email".into());
        assert_eq!(reused.error("email"), fresh.error("email"));
        assert!(!reused.is_touched("email"));
    }

    #[tokio::test]
    async fn submit_is_blocked_while_any_field_fails() {
        let mut form = FormState::new(Credentials::default(), credentials_form());
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let outcome: Result<Submission<()>, String> = form
            .handle_submit(|_values| async move {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert_eq!(outcome, Ok(Submission::Rejected));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        // o submit marca tudo como tocado: erros passam a ser visíveis
        assert!(form.visible_error("email").is_some());
    }

    #[tokio::test]
    async fn submit_invokes_callback_exactly_once_when_valid() {
        let mut form = FormState::new(
            Credentials {
                email: "user@example.com".into(),
                password: "abcdefgh".into(),
                confirm_password: "abcdefgh".into(),
            },
            credentials_form(),
        );
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let outcome: Result<Submission<&str>, String> = form
            .handle_submit(|values| async move {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                assert_eq!(values.email, "user@example.com");
                Ok("criado")
            })
            .await;

        assert_eq!(outcome, Ok(Submission::Completed("criado")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn submitting_flag_resets_even_when_callback_fails() {
        let mut form = FormState::new(
            Credentials {
                email: "user@example.com".into(),
                password: "abcdefgh".into(),
                confirm_password: "abcdefgh".into(),
            },
            credentials_form(),
        );

        let outcome: Result<Submission<()>, String> = form
            .handle_submit(|_values| async move {
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                Err("falha de rede".to_string())
            })
            .await;

        assert_eq!(outcome, Err("falha de rede".to_string()));
        assert!(!form.is_submitting());

        // o formulário continua populado para o usuário tentar de novo
        assert_eq!(form.values().email, "user@example.com");
    }
}
