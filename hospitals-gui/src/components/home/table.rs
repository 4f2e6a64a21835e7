use hospitals_lib::{Hospital, RecordStore};
use iced::{
    Element, Length,
    widget::{button, column, row, scrollable, table, text},
};

use crate::components::home::Message;

/// Columns: id, name, address and the row actions.
pub fn view(store: &RecordStore, loaded: bool) -> Element<'_, Message> {
    if !loaded {
        return column![text("Loading hospitals...")].into();
    }
    if store.is_empty() {
        return column![text("No hospitals")].into();
    }

    let columns = [
        table::column(text("Id"), |hospital: Hospital| text(hospital.id.to_string())),
        table::column(text("Name"), |hospital: Hospital| text(hospital.name)),
        table::column(text("Address"), |hospital: Hospital| text(hospital.address)),
        table::column(text("Actions"), |hospital: Hospital| {
            row![
                button(text("Edit"))
                    .style(button::secondary)
                    .on_press(Message::EditPressed(hospital.clone())),
                button(text("Delete"))
                    .style(button::danger)
                    .on_press(Message::DeletePressed(hospital.id)),
            ]
            .spacing(8)
        }),
    ];

    scrollable(table(columns, store.records().to_vec()).width(Length::Fill)).into()
}
