use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Статус согласования (наряд-допуск, этап работ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Human-readable label for badges and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "На рассмотрении",
            ApprovalStatus::Approved => "Согласовано",
            ApprovalStatus::Rejected => "Отклонено",
        }
    }

    /// Badge variant key understood by the frontend `Badge` component.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "warning",
            ApprovalStatus::Approved => "success",
            ApprovalStatus::Rejected => "error",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ApprovalStatus::Pending)
    }
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        ApprovalStatus::Pending
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ApprovalStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            other => Err(anyhow::anyhow!("unknown approval status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(ApprovalStatus::default(), ApprovalStatus::Pending);
        assert!(ApprovalStatus::default().is_pending());
    }

    #[test]
    fn test_roundtrip_str() {
        for status in [
            ApprovalStatus::Pending,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
        ] {
            let parsed: ApprovalStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("cancelled".parse::<ApprovalStatus>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ApprovalStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        let back: ApprovalStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, ApprovalStatus::Rejected);
    }
}
