use hospitals_lib::{Hospital, HospitalId, HttpClient, Outcome, Screen};
use iced::{
    Element, Length, Task,
    widget::{column, container, row, text},
};

mod form;
mod table;

#[derive(Debug, Clone)]
pub enum Message {
    Completed(Outcome),
    EditPressed(Hospital),
    DeletePressed(HospitalId),
    // Child messages
    Form(form::Message),
}

/// The hospitals table with its side form.
pub struct Home {
    screen: Screen<HttpClient>,
    /// Whether the initial load has come back, successfully or not.
    loaded: bool,
}

impl Home {
    pub fn new(client: HttpClient) -> (Self, Task<Message>) {
        let screen = Screen::new(client);
        let load = Task::perform(screen.load(), Message::Completed);

        (
            Self {
                screen,
                loaded: false,
            },
            load,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Completed(outcome) => {
                if matches!(outcome, Outcome::Loaded(_)) {
                    self.loaded = true;
                }
                // Failures are logged by the screen and leave the table as it was
                let _ = self.screen.apply(outcome);
                Task::none()
            }
            Message::EditPressed(hospital) => {
                self.screen.select_for_edit(&hospital);
                Task::none()
            }
            Message::DeletePressed(id) => {
                Task::perform(self.screen.delete(id), Message::Completed)
            }
            Message::Form(message) => match form::update(self.screen.form_mut(), message) {
                form::Action::None => Task::none(),
                form::Action::Submit => Task::perform(self.screen.submit(), Message::Completed),
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        row![
            container(column![
                text("Hospitals").size(24),
                table::view(self.screen.store(), self.loaded),
            ])
            .padding(20)
            .width(Length::FillPortion(3)),
            container(form::view(self.screen.form()).map(Message::Form))
                .padding(20)
                .width(Length::FillPortion(1)),
        ]
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod test {
    use hospitals_lib::{ApiError, Hospital, HttpClient, Outcome, config::ApiConfig};

    use super::{Home, Message};

    fn home() -> Home {
        let client = HttpClient::new(&ApiConfig::default()).unwrap();
        Home::new(client).0
    }

    #[test]
    fn test_loading_until_first_load() {
        let mut home = home();
        assert!(!home.loaded);

        let created = Hospital::new(7, "Clinic A", "2nd Ave");
        let _ = home.update(Message::Completed(Outcome::Created(Ok(created))));
        assert!(!home.loaded);

        let general = Hospital::new(1, "General", "Main St");
        let _ = home.update(Message::Completed(Outcome::Loaded(Ok(vec![general.clone()]))));
        assert!(home.loaded);
        assert_eq!(home.screen.store().records(), &[general]);
    }

    #[test]
    fn test_failed_load_ends_loading() {
        let mut home = home();

        let _ = home.update(Message::Completed(Outcome::Loaded(Err(ApiError::Status {
            status: 503,
        }))));

        assert!(home.loaded);
        assert!(home.screen.store().is_empty());
    }

    #[test]
    fn test_edit_pressed_loads_draft() {
        let mut home = home();

        let _ = home.update(Message::EditPressed(Hospital::new(1, "General", "Main St")));

        assert!(home.screen.form().is_editing());
        assert_eq!(home.screen.form().fields().name, "General");
    }
}
