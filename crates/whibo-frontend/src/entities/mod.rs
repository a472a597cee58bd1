use gpui::Entity;

pub mod history_entity;
pub mod page_entity;
pub mod settings_entity;

#[derive(Debug, Clone)]
pub struct DataEntities {
    pub page: Entity<page_entity::PageEntity>,
    pub history: Entity<history_entity::HistoryEntity>,
    pub settings: Entity<settings_entity::SettingsEntity>,
}
