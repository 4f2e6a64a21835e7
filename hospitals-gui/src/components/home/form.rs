use hospitals_lib::FormController;
use iced::{
    Element,
    widget::{button, column, container, row, space, text, text_input},
};

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    AddressInput(String),
    SubmitPressed,
}

pub enum Action {
    None,
    Submit,
}

pub fn update(form: &mut FormController, message: Message) -> Action {
    match message {
        Message::NameInput(content) => {
            form.set_name(content);
            Action::None
        }
        Message::AddressInput(content) => {
            form.set_address(content);
            Action::None
        }
        // The button is disabled while invalid, but Enter in a text input still gets here
        Message::SubmitPressed if form.is_valid() => Action::Submit,
        Message::SubmitPressed => Action::None,
    }
}

pub fn view(form: &FormController) -> Element<'_, Message> {
    let fields = form.fields();
    let submit = form.is_valid().then_some(Message::SubmitPressed);

    let (title, label) = if form.is_editing() {
        ("Edit hospital", "Update")
    } else {
        ("New hospital", "Create")
    };

    container(
        column![
            text(title).size(20),
            text("Name"),
            text_input("...", &fields.name)
                .on_input(Message::NameInput)
                .on_submit_maybe(submit.clone()),
            text("Address"),
            text_input("...", &fields.address)
                .on_input(Message::AddressInput)
                .on_submit_maybe(submit.clone()),
            row![space::horizontal(), button(text(label)).on_press_maybe(submit)],
        ]
        .spacing(8),
    )
    .style(container::bordered_box)
    .padding(20)
    .into()
}
