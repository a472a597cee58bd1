use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    StyledExt,
    group_box::{GroupBox, GroupBoxVariants},
};

use crate::{components::detail_row::DetailRow, entities::DataEntities};

/// Read-only view of the loaded configuration.
pub struct SettingsPage {
    data: DataEntities,
}

impl SettingsPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.settings, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }
}

fn millis(value: u64) -> String {
    format!("{value} ms")
}

impl Render for SettingsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let config = self.data.settings.read(cx).config.clone();
        let timings = &config.timings;

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(div().child("Settings").text_2xl().font_bold())
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("History").text_xl().font_bold())
                    .child(
                        DetailRow::new()
                            .label("Storage key")
                            .child(config.storage_key.clone()),
                    )
                    .child(
                        DetailRow::new()
                            .label("Entries kept")
                            .child(config.history_limit.to_string()),
                    ),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Timings").text_xl().font_bold())
                    .child(
                        DetailRow::new()
                            .label("Alert auto-dismiss")
                            .child(millis(timings.alert_dismiss_ms)),
                    )
                    .child(
                        DetailRow::new()
                            .label("Alert fade")
                            .child(millis(timings.alert_fade_ms)),
                    )
                    .child(
                        DetailRow::new()
                            .label("Notification lifetime")
                            .child(millis(timings.notification_lifetime_ms)),
                    )
                    .child(
                        DetailRow::new()
                            .label("Auto-save delay")
                            .child(millis(timings.auto_save_delay_ms)),
                    ),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Page").text_xl().font_bold())
                    .child(
                        DetailRow::new().label("Client IP").child(
                            config
                                .page
                                .client_ip
                                .clone()
                                .unwrap_or_else(|| "unknown".to_owned()),
                        ),
                    ),
            )
    }
}
