use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, IconName, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
};

use crate::{BackendBridge, components::detail_row::DetailRow, entities::DataEntities};

pub struct HistoryPage {
    data: DataEntities,
}

impl HistoryPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.history, |_, _, cx| cx.notify()).detach();

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_history().await;
        })
        .detach();

        Self { data: data.clone() }
    }
}

impl Render for HistoryPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let records = self.data.history.read(cx).records.clone();
        let muted = cx.theme().muted_foreground;
        let is_empty = records.is_empty();

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().child("Download history").text_2xl().font_bold())
                    .child(
                        Button::new("refresh_history")
                            .outline()
                            .icon(IconName::Inbox)
                            .label("Refresh")
                            .on_click(cx.listener(|_, _, _, cx| {
                                let bridge = cx.global::<BackendBridge>().clone();
                                cx.spawn(async move |_, _| {
                                    bridge.request_history().await;
                                })
                                .detach();
                            })),
                    ),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .children(records.into_iter().map(|record| {
                        DetailRow::new().label(record.filename).child(
                            div()
                                .text_sm()
                                .text_color(muted)
                                .child(format!("{} · {}", record.quality, record.timestamp)),
                        )
                    }))
                    .when(is_empty, |this| {
                        this.child(div().text_color(muted).child("No downloads yet"))
                    }),
            )
    }
}
