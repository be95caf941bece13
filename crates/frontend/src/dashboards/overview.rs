use crate::domain::contractors::demo_contractors;
use crate::domain::permits::demo_permits;
use crate::shared::components::ui::Heading;
use crate::shared::components::StatCard;
use contracts::domain::contractor::ContractorStatus;
use contracts::domain::work_permit::WorkPermit;
use contracts::shared::approval::ApprovalStatus;
use leptos::prelude::*;

fn count_permits(permits: &[WorkPermit], status: ApprovalStatus) -> usize {
    permits
        .iter()
        .map(|p| {
            let own = usize::from(p.status.unwrap_or_default() == status);
            own + count_permits(&p.children, status)
        })
        .sum()
}

/// Сводка по допускам и подрядчикам.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let contractors = demo_contractors();
    let permits = demo_permits();

    let active = contractors
        .iter()
        .filter(|c| c.status == ContractorStatus::Active)
        .count();
    let suspended = contractors
        .iter()
        .filter(|c| c.status == ContractorStatus::Suspended)
        .count();
    let pending = count_permits(&permits, ApprovalStatus::Pending);
    let rejected = count_permits(&permits, ApprovalStatus::Rejected);

    view! {
        <div class="page page--overview">
            <Heading level=2>"Обзор"</Heading>
            <div class="stat-grid">
                <StatCard
                    title="Допущенных подрядчиков"
                    value=active.to_string()
                    icon_name="building"
                    accent="success".to_string()
                />
                <StatCard
                    title="Допуск приостановлен"
                    value=suspended.to_string()
                    icon_name="shield"
                    accent="warning".to_string()
                />
                <StatCard
                    title="Нарядов на рассмотрении"
                    value=pending.to_string()
                    icon_name="clipboard"
                />
                <StatCard
                    title="Нарядов отклонено"
                    value=rejected.to_string()
                    icon_name="x"
                    accent="error".to_string()
                />
            </div>
        </div>
    }
}
