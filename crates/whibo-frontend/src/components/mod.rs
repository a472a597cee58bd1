pub mod alert_box;
pub mod detail_row;
pub mod page_node;
