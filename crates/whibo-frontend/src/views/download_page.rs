use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{ActiveTheme, StyledExt};

use crate::{components::page_node::render_node, entities::DataEntities};

pub struct DownloadPage {
    data: DataEntities,
}

impl DownloadPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.page, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }
}

impl Render for DownloadPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let page = self.data.page.read(cx);
        let validity = match page.url_valid {
            Some(true) => "Link looks good",
            Some(false) => "Please enter a valid video link",
            None => "",
        };
        let save_status = page.last_save.as_ref().map(|save| match &save.href {
            Some(href) => format!("Saving download {} from {href}", save.download_id),
            None => format!("Saving download {}", save.download_id),
        });
        let content: Vec<_> = page
            .content()
            .iter()
            .map(|node| render_node(node, cx))
            .collect();

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Download").text_2xl().font_bold())
            .children(content)
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(validity),
            )
            .children(save_status.map(|status| div().text_sm().child(status)))
    }
}
