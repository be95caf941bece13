use leptos::prelude::*;

/// Разделы админ-панели, переключаются через сайдбар
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    Contractors,
    Permits,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Обзор",
            Section::Contractors => "Подрядчики",
            Section::Permits => "Наряды-допуски",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "bar-chart",
            Section::Contractors => "building",
            Section::Permits => "clipboard",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Overview),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn open_section(&self, section: Section) {
        self.active.set(section);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
