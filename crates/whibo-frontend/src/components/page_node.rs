//! Renders page snapshot nodes as gpui elements.
//!
//! Known shapes (alerts, the URL field, the progress block, links) get a
//! dedicated look; everything else becomes a plain text container.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, Styled, div, hsla, prelude::FluentBuilder, px,
    relative,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};
use whibo_page::SnapshotNode;

use crate::{BackendBridge, components::alert_box::AlertBox};

const INVALID_CLASS: &str = "is-invalid";

pub fn render_node(node: &SnapshotNode, cx: &App) -> AnyElement {
    let element = &node.element;
    if element.has_class("alert") {
        return AlertBox::from_node(node).into_any_element();
    }
    if element.has_class("progress") {
        return render_progress(node, cx);
    }

    match element.tag.as_str() {
        "input" => render_input(node, cx),
        "a" => render_link(node, cx),
        "i" if element.has_class("fa-download") => div().child("⬇").into_any_element(),
        "small" => div()
            .text_xs()
            .text_color(cx.theme().muted_foreground)
            .child(element.text.clone())
            .into_any_element(),
        _ => div()
            .flex()
            .items_center()
            .gap_2()
            .when(!element.text.is_empty(), |this| {
                this.child(element.text.clone())
            })
            .children(node.children.iter().map(|child| render_node(child, cx)))
            .into_any_element(),
    }
}

fn render_input(node: &SnapshotNode, cx: &App) -> AnyElement {
    let element = &node.element;
    let invalid = element.has_class(INVALID_CLASS);
    let (text, color) = if element.value.is_empty() {
        (
            element.attribute("placeholder").unwrap_or_default().to_owned(),
            cx.theme().muted_foreground,
        )
    } else {
        (element.value.clone(), cx.theme().foreground)
    };

    div()
        .flex()
        .items_center()
        .gap_3()
        .child(
            div()
                .flex_1()
                .px_3()
                .py_2()
                .rounded_md()
                .border_1()
                .border_color(if invalid {
                    hsla(0.0, 0.7, 0.5, 1.0)
                } else {
                    cx.theme().border
                })
                .text_color(color)
                .overflow_hidden()
                .child(text),
        )
        .child(
            Button::new("paste_url")
                .primary()
                .icon(IconName::Copy)
                .label("Paste link")
                .on_click(|_, _, cx| {
                    let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) else {
                        log::debug!("Clipboard holds no text");
                        return;
                    };
                    let bridge = cx.global::<BackendBridge>().clone();
                    cx.spawn(async move |_| {
                        bridge.url_input(text).await;
                    })
                    .detach();
                }),
        )
        .into_any_element()
}

fn render_progress(node: &SnapshotNode, cx: &App) -> AnyElement {
    let width = node
        .iter()
        .find_map(|child| child.element.style.width_percent)
        .unwrap_or(0.0);
    let label = node
        .children
        .iter()
        .find(|child| child.element.tag == "span")
        .map(|child| child.element.text.clone())
        .unwrap_or_default();

    div()
        .flex()
        .items_center()
        .gap_3()
        .child(
            div()
                .flex_1()
                .h(px(10.))
                .rounded_md()
                .bg(cx.theme().muted)
                .child(
                    div()
                        .h_full()
                        .rounded_md()
                        .bg(cx.theme().primary)
                        .w(relative((width / 100.0) as f32)),
                ),
        )
        .child(div().text_sm().font_semibold().child(label))
        .into_any_element()
}

fn render_link(node: &SnapshotNode, cx: &App) -> AnyElement {
    let element = &node.element;
    div()
        .flex()
        .items_center()
        .gap_3()
        .child(
            Button::new(("page_link", node.id.as_u64() as usize))
                .outline()
                .small()
                .icon(IconName::ArrowDown)
                .label(element.text.clone()),
        )
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child(element.attribute("href").unwrap_or("No file yet").to_owned()),
        )
        .into_any_element()
}
