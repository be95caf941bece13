pub mod tree;

use crate::shared::components::table::TreeRow;
use contracts::domain::work_permit::WorkPermit;
use contracts::shared::approval::ApprovalStatus;
use chrono::NaiveDate;

impl TreeRow for WorkPermit {
    fn id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn status(&self) -> Option<ApprovalStatus> {
        self.status
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Демонстрационная иерархия: наряд → этап → вид работ.
pub fn demo_permits() -> Vec<WorkPermit> {
    vec![
        WorkPermit::new("nd-101", "Капремонт компрессорной", "СМУ-1 «СтройМонтаж»", "Цех 3")
            .with_dates(date(2025, 9, 1), date(2025, 11, 30))
            .with_children(vec![
                WorkPermit::new("nd-101-1", "Демонтаж трубопроводов", "СМУ-1 «СтройМонтаж»", "Цех 3")
                    .with_dates(date(2025, 9, 1), date(2025, 9, 20))
                    .with_status(ApprovalStatus::Approved)
                    .with_children(vec![
                        WorkPermit::new("nd-101-1-1", "Газорезательные работы", "СварТехМонтаж", "Цех 3")
                            .with_dates(date(2025, 9, 3), date(2025, 9, 12)),
                        WorkPermit::new("nd-101-1-2", "Работы на высоте", "АльпСервис", "Цех 3")
                            .with_dates(date(2025, 9, 5), date(2025, 9, 18))
                            .with_status(ApprovalStatus::Rejected),
                    ]),
                WorkPermit::new("nd-101-2", "Монтаж нового оборудования", "ПромВысота", "Цех 3")
                    .with_dates(date(2025, 9, 21), date(2025, 11, 15)),
            ]),
        WorkPermit::new("nd-102", "Ремонт кровли склада", "КровляПрофи", "Склад 7")
            .with_dates(date(2025, 10, 1), date(2025, 10, 25))
            .with_children(vec![
                WorkPermit::new("nd-102-1", "Огневые работы", "КровляПрофи", "Склад 7")
                    .with_dates(date(2025, 10, 2), date(2025, 10, 10)),
            ]),
        WorkPermit::new("nd-103", "Замена кабельных линий", "ЭлектроСеть Сервис", "Подстанция 2")
            .with_dates(date(2025, 10, 5), date(2025, 12, 1))
            .with_status(ApprovalStatus::Approved),
    ]
}
