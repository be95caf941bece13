use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор подрядной организации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractorId(pub Uuid);

impl ContractorId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Contractor
// ============================================================================

/// Статус допуска подрядчика на объекты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractorStatus {
    Active,
    Suspended,
    Archived,
}

impl ContractorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContractorStatus::Active => "Допущен",
            ContractorStatus::Suspended => "Приостановлен",
            ContractorStatus::Archived => "В архиве",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ContractorStatus::Active => "success",
            ContractorStatus::Suspended => "warning",
            ContractorStatus::Archived => "neutral",
        }
    }
}

/// Подрядная организация (юридическое лицо или ИП)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: ContractorId,
    pub name: String,
    pub inn: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    pub status: ContractorStatus,
    #[serde(rename = "registeredAt")]
    pub registered_at: DateTime<Utc>,
    /// Количество работников, внесённых в реестр
    pub workers: u32,
}

impl Contractor {
    pub fn new(name: &str, inn: &str, contact_email: &str, workers: u32) -> Self {
        Self {
            id: ContractorId::new_v4(),
            name: name.to_string(),
            inn: inn.to_string(),
            contact_email: contact_email.to_string(),
            status: ContractorStatus::Active,
            registered_at: Utc::now(),
            workers,
        }
    }

    /// Минимальная проверка карточки перед сохранением.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("contractor name must not be empty");
        }
        if !self.inn.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("inn must contain digits only: {}", self.inn);
        }
        if !(self.inn.len() == 10 || self.inn.len() == 12) {
            anyhow::bail!("inn must be 10 or 12 digits long, got {}", self.inn.len());
        }
        if !self.contact_email.contains('@') {
            anyhow::bail!("contact email looks invalid: {}", self.contact_email);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let c = Contractor::new("СтройМонтаж", "7701234567", "office@sm.ru", 42);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_inn() {
        let mut c = Contractor::new("СтройМонтаж", "77А1234567", "office@sm.ru", 42);
        assert!(c.validate().is_err());

        c.inn = "123".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let c = Contractor::new("  ", "7701234567", "office@sm.ru", 1);
        assert!(c.validate().is_err());
    }
}
