//! Client Directory
//!
//! Ordered client list behind the Clients page and its "Add Client" dialog.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldErrors, Rule, RuleSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientField {
    CompanyName,
    ContactPerson,
    Email,
    Phone,
}

impl ClientField {
    pub fn label(&self) -> &'static str {
        match self {
            ClientField::CompanyName => "Company Name",
            ClientField::ContactPerson => "Contact Person",
            ClientField::Email => "Email",
            ClientField::Phone => "Phone (Optional)",
        }
    }
}

/// Raw dialog input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientDraft {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

impl ClientDraft {
    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::CompanyName => &self.company_name,
            ClientField::ContactPerson => &self.contact_person,
            ClientField::Email => &self.email,
            ClientField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: ClientField, value: String) {
        match field {
            ClientField::CompanyName => self.company_name = value,
            ClientField::ContactPerson => self.contact_person = value,
            ClientField::Email => self.email = value,
            ClientField::Phone => self.phone = value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientDirectory {
    clients: Vec<Client>,
    rules: RuleSet<ClientField>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients, rules: Self::default_rules() }
    }

    fn default_rules() -> RuleSet<ClientField> {
        RuleSet::new()
            .with(ClientField::CompanyName, Rule::MinChars(2), "Company name must be at least 2 characters.")
            .with(ClientField::ContactPerson, Rule::MinChars(2), "Contact name must be at least 2 characters.")
            .with(ClientField::Email, Rule::email(), "Please enter a valid email.")
            .with(ClientField::Phone, Rule::Optional, "")
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Check a draft without adding it
    pub fn validate(&self, draft: &ClientDraft) -> FieldErrors<ClientField> {
        self.rules.validate(
            [ClientField::CompanyName, ClientField::ContactPerson, ClientField::Email, ClientField::Phone],
            |f| draft.get(f),
        )
    }

    /// One past the highest `CLI` number in use
    fn next_id(&self) -> String {
        let highest = self
            .clients
            .iter()
            .filter_map(|c| c.id.strip_prefix("CLI")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("CLI{:03}", highest + 1)
    }

    /// Validate and append. New ids continue the `CLI001` sequence.
    pub fn add(&mut self, draft: ClientDraft) -> Result<&Client, FieldErrors<ClientField>> {
        let errors = self.validate(&draft);
        if !errors.is_empty() {
            return Err(errors);
        }
        let phone = match draft.phone.trim() {
            "" => None,
            phone => Some(phone.to_string()),
        };
        let client = Client {
            id: self.next_id(),
            company_name: draft.company_name,
            contact_person: draft.contact_person,
            email: draft.email,
            phone,
        };
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }
}

impl Default for ClientDirectory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ClientDraft {
        ClientDraft {
            company_name: "Globex".to_string(),
            contact_person: "Hank Scorpio".to_string(),
            email: "hank@globex.com".to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut directory = ClientDirectory::default();
        let id = directory.add(draft()).unwrap().id.clone();
        assert_eq!(id, "CLI001");

        let second = directory.add(draft()).unwrap();
        assert_eq!(second.id, "CLI002");
        assert_eq!(second.phone, None);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_add_skips_ids_already_taken() {
        let existing = Client {
            id: "CLI002".to_string(),
            company_name: "Initech".to_string(),
            contact_person: "Bill Lumbergh".to_string(),
            email: "bill@initech.com".to_string(),
            phone: None,
        };
        let mut directory = ClientDirectory::new(vec![existing]);

        let id = directory.add(draft()).unwrap().id.clone();
        assert_eq!(id, "CLI003");

        let ids: Vec<_> = directory.clients().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CLI002", "CLI003"]);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut directory = ClientDirectory::default();
        let mut bad = draft();
        bad.company_name = "G".to_string();
        bad.email = "not-an-email".to_string();

        let errors = directory.add(bad).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ClientField::CompanyName, ClientField::Email]
        );
        assert_eq!(errors.get(ClientField::Email), Some("Please enter a valid email."));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_phone_kept_when_given() {
        let mut directory = ClientDirectory::default();
        let mut with_phone = draft();
        with_phone.set(ClientField::Phone, " 555-0100 ".to_string());
        let client = directory.add(with_phone).unwrap();
        assert_eq!(client.phone.as_deref(), Some("555-0100"));
    }
}
