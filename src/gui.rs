//! Optional iced window exposing the same greeting and git actions as the
//! CLI. Buttons drive the shared engine through async tasks; results land
//! in the output label.

use crate::config::Settings;
use crate::core::git::{self, GitOutcome};
use crate::core::greeter::{greet, GreetEngine};
use crate::core::resolver::FallbackResolver;
use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Size, Task};

pub fn run(settings: Settings) -> iced::Result {
    iced::application("Hello World GUI", App::update, App::view)
        .window_size(Size::new(420.0, 300.0))
        .run_with(move || (App::new(settings), Task::none()))
}

struct App {
    settings: Settings,
    name_input: String,
    commit_input: String,
    output: String,
}

#[derive(Debug, Clone)]
enum Message {
    NameChanged(String),
    CommitChanged(String),
    Greet,
    GreetRandom,
    CommitAndPush,
    Greeted(String),
    CommitFinished(Result<String, String>),
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            name_input: String::new(),
            commit_input: String::new(),
            output: "Welcome! Enter a name or click a button.".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => {
                self.name_input = value;
                Task::none()
            }
            Message::CommitChanged(value) => {
                self.commit_input = value;
                Task::none()
            }
            Message::Greet => {
                let name = (!self.name_input.trim().is_empty()).then(|| self.name_input.trim());
                self.output = greet(name);
                tracing::info!("GUI greeting: {}", self.output);
                Task::none()
            }
            Message::GreetRandom => {
                let settings = self.settings.clone();
                Task::perform(
                    async move {
                        let engine = GreetEngine::new(FallbackResolver::new(settings));
                        engine.greet_random().await
                    },
                    Message::Greeted,
                )
            }
            Message::Greeted(message) => {
                tracing::info!("GUI random greeting: {}", message);
                self.output = message;
                Task::none()
            }
            Message::CommitAndPush => {
                let message = self.commit_input.trim().to_string();
                if message.is_empty() {
                    self.output = "Commit message cannot be empty".to_string();
                    return Task::none();
                }
                Task::perform(
                    async move {
                        match git::commit_and_push(&message).await {
                            Ok(GitOutcome::Committed) => {
                                Ok("Changes committed and pushed".to_string())
                            }
                            Ok(GitOutcome::NothingToCommit) => {
                                Ok("Nothing to commit, working tree clean".to_string())
                            }
                            Err(e) => Err(e.user_friendly_message()),
                        }
                    },
                    Message::CommitFinished,
                )
            }
            Message::CommitFinished(Ok(message)) => {
                self.output = message;
                self.commit_input.clear();
                Task::none()
            }
            Message::CommitFinished(Err(message)) => {
                tracing::error!("GUI git operation failed: {}", message);
                self.output = format!("❌ {}", message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            row![
                text("Name:"),
                text_input("Name to greet", &self.name_input).on_input(Message::NameChanged),
            ]
            .spacing(10),
            row![
                button("Greet").on_press(Message::Greet),
                button("Random Historical").on_press(Message::GreetRandom),
            ]
            .spacing(10),
            row![
                text("Git commit:"),
                text_input("Commit message", &self.commit_input)
                    .on_input(Message::CommitChanged),
            ]
            .spacing(10),
            button("Commit & Push").on_press(Message::CommitAndPush),
            text(&self.output),
        ]
        .spacing(10)
        .padding(20)
        .into()
    }
}
