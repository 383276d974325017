//! Client validation rules.

use crate::client::Client;

/// Pure predicate deciding whether a client's fields may be persisted.
pub trait ClientValidator: Send + Sync {
    fn is_valid(&self, client: &Client) -> bool;
}

/// Closures work as validators (tests inject stubs this way).
impl<F> ClientValidator for F
where
    F: Fn(&Client) -> bool + Send + Sync,
{
    fn is_valid(&self, client: &Client) -> bool {
        self(client)
    }
}

/// Default rules: non-blank first and last name, plausible email address.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultClientValidator;

impl DefaultClientValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ClientValidator for DefaultClientValidator {
    fn is_valid(&self, client: &Client) -> bool {
        !client.first_name().trim().is_empty()
            && !client.last_name().trim().is_empty()
            && is_plausible_email(client.email())
    }
}

/// One `@`, non-empty local part, dotted domain with no leading/trailing dot.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
