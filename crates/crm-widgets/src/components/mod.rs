//! Yew components mounted by the registry. One component per widget kind.
pub(crate) mod date_picker;
pub(crate) mod resource_select;
pub(crate) mod resource_table;

pub(crate) use date_picker::{DatePicker, DatePickerProps};
pub(crate) use resource_select::{ResourceSelect, ResourceSelectProps};
pub(crate) use resource_table::{ResourceTable, ResourceTableProps};
