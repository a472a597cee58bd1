use gpui::{AppContext, Entity};
use whibo_bridge::config::Config;

#[derive(Debug, Clone, Default)]
pub struct SettingsEntity {
    pub config: Config,
}

impl SettingsEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, config: Config, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            this.config = config;
            cx.notify();
        });
    }
}
