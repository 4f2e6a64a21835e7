use hospitals_lib::{Config, HttpClient, config::ApiConfig};
use iced::{Element, Task, Theme, application};
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::home::{self, Home},
    config::GuiConfig,
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let theme = GuiConfig::load().theme();
    let Some(client) = http_client(&Config::load()) else {
        std::process::exit(1);
    };

    application(
        move || App::new(client.clone(), theme.clone()),
        App::update,
        App::view,
    )
    .theme(App::theme)
    .title(App::title)
    .run()
}

/// Build the API client, falling back to the default endpoint if the configured one is unusable.
/// `None` means not even the default works (e.g. the TLS backend failed to initialize); that has
/// already been logged.
fn http_client(cfg: &Config) -> Option<HttpClient> {
    HttpClient::new(&cfg.api)
        .or_else(|err| {
            error!("{err}, falling back to the default endpoint");
            HttpClient::new(&ApiConfig::default())
        })
        .inspect_err(|err| error!("Cannot set up the hospital API client: {err}"))
        .ok()
}

#[derive(Debug, Clone)]
enum Message {
    Home(home::Message),
}

struct App {
    title: String,
    theme: Theme,
    // Components
    home: Home,
}

impl App {
    pub fn new(client: HttpClient, theme: Theme) -> (Self, Task<Message>) {
        let (home, home_task) = Home::new(client);

        (
            Self {
                title: "Hospitals".into(),
                theme,
                home,
            },
            home_task.map(Message::Home),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(msg) => self.home.update(msg).map(Message::Home),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.home.view().map(Message::Home)
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

#[cfg(test)]
mod test {
    use hospitals_lib::{Config, config::ApiConfig};

    use super::http_client;

    #[test]
    fn test_configured_endpoint() {
        let cfg = Config {
            api: ApiConfig {
                endpoint: "https://hospitals.example.org/hospitales".into(),
                timeout_secs: None,
            },
            ..Config::default()
        };

        let client = http_client(&cfg).unwrap();

        assert_eq!(
            client.endpoint().as_str(),
            "https://hospitals.example.org/hospitales"
        );
    }

    #[test]
    fn test_bad_endpoint_falls_back_to_default() {
        let cfg = Config {
            api: ApiConfig {
                endpoint: "ftp://nope".into(),
                timeout_secs: None,
            },
            ..Config::default()
        };

        let client = http_client(&cfg).unwrap();

        assert_eq!(
            client.endpoint().as_str(),
            ApiConfig::default().endpoint.as_str()
        );
    }
}
