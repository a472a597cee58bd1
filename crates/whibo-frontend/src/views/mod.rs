mod download_page;
mod history_page;
mod settings_page;

use gpui::{
    AnyView, AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::{
    IconName, Side,
    sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem},
};

use crate::{
    components::alert_box::AlertBox,
    entities::DataEntities,
    views::{
        download_page::DownloadPage, history_page::HistoryPage, settings_page::SettingsPage,
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PageUi {
    Download,
    History,
    Settings,
}

pub struct FrontendUi {
    data: DataEntities,
    active_page: PageUi,
    active_page_view: AnyView,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, _: &mut Window, cx: &mut Context<Self>) -> Self {
        // toasts float above every page
        cx.observe(&data.page, |_, _, cx| cx.notify()).detach();

        let initial_view = cx.new(|cx| DownloadPage::new(data, cx)).into();
        Self {
            data: data.clone(),
            active_page: PageUi::Download,
            active_page_view: initial_view,
        }
    }

    pub fn change_page(&mut self, page: PageUi, _: &mut Window, cx: &mut Context<Self>) {
        let new_page = match page {
            PageUi::Download => cx.new(|cx| DownloadPage::new(&self.data, cx)).into(),
            PageUi::History => cx.new(|cx| HistoryPage::new(&self.data, cx)).into(),
            PageUi::Settings => cx.new(|cx| SettingsPage::new(&self.data, cx)).into(),
        };
        self.active_page = page;
        self.active_page_view = new_page;
        cx.notify();
    }
}

impl Render for FrontendUi {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let toasts = self.data.page.read(cx).toasts();
        let on_page_change = |page| {
            cx.listener(move |this, _, window, cx| {
                this.change_page(page, window, cx);
            })
        };

        div()
            .flex()
            .size_full()
            .child(
                Sidebar::new(Side::Left)
                    .header(SidebarHeader::new().child("WhiBO"))
                    .child(
                        SidebarGroup::new("Navigation").child(
                            SidebarMenu::new()
                                .child(
                                    SidebarMenuItem::new("Download")
                                        .active(self.active_page == PageUi::Download)
                                        .icon(IconName::LayoutDashboard)
                                        .on_click(on_page_change(PageUi::Download)),
                                )
                                .child(
                                    SidebarMenuItem::new("History")
                                        .active(self.active_page == PageUi::History)
                                        .icon(IconName::Inbox)
                                        .on_click(on_page_change(PageUi::History)),
                                )
                                .child(
                                    SidebarMenuItem::new("Settings")
                                        .active(self.active_page == PageUi::Settings)
                                        .icon(IconName::Settings)
                                        .on_click(on_page_change(PageUi::Settings)),
                                ),
                        ),
                    ),
            )
            .child(div().p_5().size_full().child(self.active_page_view.clone()))
            .child(
                div()
                    .absolute()
                    .top_0()
                    .right_0()
                    .m_3()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .children(toasts.iter().map(AlertBox::from_node)),
            )
    }
}
