use gpui::{Hsla, IntoElement, ParentElement, SharedString, Styled, div, hsla, px};
use gpui_component::{
    IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};
use whibo_page::{ElementId, SnapshotNode};

use crate::BackendBridge;

/// A flash alert or toast taken from the page, with a close button.
#[derive(IntoElement)]
pub struct AlertBox {
    id: ElementId,
    severity: SharedString,
    icon: &'static str,
    message: SharedString,
    opacity: f32,
}

impl AlertBox {
    pub fn from_node(node: &SnapshotNode) -> Self {
        let severity = node
            .element
            .classes
            .iter()
            .filter_map(|class| class.strip_prefix("alert-"))
            .find(|suffix| *suffix != "dismissible")
            .unwrap_or("info")
            .to_owned();
        let icon = match node.find_child_by_class("fas") {
            Some(icon) if icon.element.has_class("fa-check-circle") => "✔",
            Some(_) => "ℹ",
            None => "",
        };

        Self {
            id: node.id,
            severity: severity.into(),
            icon,
            message: node.element.text.clone().into(),
            opacity: node.element.style.opacity.unwrap_or(1.0),
        }
    }
}

fn severity_color(severity: &str) -> Hsla {
    match severity {
        "success" => hsla(0.38, 0.55, 0.38, 0.95),
        "warning" => hsla(0.11, 0.85, 0.45, 0.95),
        "danger" => hsla(0.0, 0.7, 0.48, 0.95),
        _ => hsla(0.56, 0.65, 0.45, 0.95),
    }
}

impl gpui::RenderOnce for AlertBox {
    fn render(self, _: &mut gpui::Window, _: &mut gpui::App) -> impl IntoElement {
        let id = self.id;
        div()
            .flex()
            .items_center()
            .gap_3()
            .min_w(px(300.))
            .px_4()
            .py_2()
            .rounded_xl()
            .shadow_lg()
            .bg(severity_color(&self.severity))
            .text_color(hsla(0., 0., 1., 0.95))
            .opacity(self.opacity)
            .child(div().font_bold().child(self.icon))
            .child(div().flex_1().child(self.message))
            .child(
                Button::new(("dismiss_alert", id.as_u64() as usize))
                    .icon(IconName::Close)
                    .outline()
                    .small()
                    .on_click(move |_, _, cx| {
                        let bridge = cx.global::<BackendBridge>().clone();
                        cx.spawn(async move |_| {
                            bridge.dismiss_notification(id).await;
                        })
                        .detach();
                    }),
            )
    }
}
