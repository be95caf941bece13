use crate::shared::approval::ApprovalStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Узел иерархии нарядов-допусков: наряд → этап → вид работ.
///
/// Вложенность произвольной глубины, `children` пустой для листьев.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPermit {
    pub id: String,
    pub title: String,
    /// Подрядчик, выполняющий работы по этому узлу
    pub contractor: String,
    pub site: String,
    #[serde(rename = "startsOn")]
    pub starts_on: NaiveDate,
    #[serde(rename = "endsOn")]
    pub ends_on: NaiveDate,
    /// Отсутствие статуса трактуется как "на рассмотрении"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WorkPermit>,
}

impl WorkPermit {
    pub fn new(id: &str, title: &str, contractor: &str, site: &str) -> Self {
        let starts_on = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        Self {
            id: id.to_string(),
            title: title.to_string(),
            contractor: contractor.to_string(),
            site: site.to_string(),
            starts_on,
            ends_on: starts_on,
            status: None,
            children: Vec::new(),
        }
    }

    pub fn with_dates(mut self, starts_on: NaiveDate, ends_on: NaiveDate) -> Self {
        self.starts_on = starts_on;
        self.ends_on = ends_on;
        self
    }

    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_children(mut self, children: Vec<WorkPermit>) -> Self {
        self.children = children;
        self
    }

    /// Проверка дат перед сохранением: окончание не раньше начала.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ends_on < self.starts_on {
            anyhow::bail!(
                "permit {}: ends_on {} is before starts_on {}",
                self.id,
                self.ends_on,
                self.starts_on
            );
        }
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_deserializes_as_none() {
        let json = r#"{"id":"p1","title":"Работы","contractor":"СМУ-1","site":"Цех 3","startsOn":"2025-03-01","endsOn":"2025-03-10"}"#;
        let permit: WorkPermit = serde_json::from_str(json).unwrap();
        assert!(permit.status.is_none());
        assert!(permit.children.is_empty());
    }

    #[test]
    fn test_validate_recurses_into_children() {
        let bad_child = WorkPermit::new("p1-1", "Этап", "СМУ-1", "Цех 3").with_dates(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        let root =
            WorkPermit::new("p1", "Наряд", "СМУ-1", "Цех 3").with_children(vec![bad_child]);
        assert!(root.validate().is_err());
    }
}
