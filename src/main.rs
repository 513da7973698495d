use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Duration;

// Declare the application modules
mod net;
mod state;
mod ui;

use state::data::{AnalysisResult, SelectedImage};
use state::presenter::{Presenter, Tab, COPY_FEEDBACK_MILLIS};
use state::session::Session;

/// Main application state
struct PromptLens {
    /// The upload-and-analyze state machine
    session: Session,
    /// Tab selection and copy feedback for the current result
    presenter: Presenter,
    /// Shared HTTP client, cloned into request tasks
    http: reqwest::Client,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select Image" / "Change Image" button
    PickImage,
    /// Background read of the picked file completed
    ImageLoaded(Result<SelectedImage, String>),
    /// User clicked the "Analyze Image" button
    Analyze,
    /// The analysis exchange resolved, tagged with its request generation
    AnalysisFinished(u64, Result<AnalysisResult, String>),
    /// User clicked a result tab
    TabSelected(Tab),
    /// User clicked the copy button of a tab
    CopyPressed(Tab),
    /// A copy acknowledgment timer fired
    CopyExpired(Tab, u64),
}

impl PromptLens {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🔍 Prompt Lens ready");

        (
            PromptLens {
                session: Session::new(),
                presenter: Presenter::new(),
                http: reqwest::Client::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select an Image")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .pick_file();

                if let Some(path) = picked {
                    match state::data::image_mime(&path) {
                        Some(mime) => {
                            // Read the bytes off the UI thread
                            return Task::perform(
                                load_selected_image(path, mime),
                                Message::ImageLoaded,
                            );
                        }
                        None => {
                            eprintln!("⚠️  Rejected non-image selection: {}", path.display());
                            self.session.invalid_selection();
                        }
                    }
                }

                Task::none()
            }
            Message::ImageLoaded(Ok(image)) => {
                println!("🖼️  Selected {} ({})", image.file_name, image.mime);

                self.session.image_selected(image);
                self.presenter.reset();

                Task::none()
            }
            Message::ImageLoaded(Err(message)) => {
                eprintln!("⚠️  Could not read selection: {}", message);
                self.session.load_failed(message);

                Task::none()
            }
            Message::Analyze => {
                if let Some((seq, image)) = self.session.begin_analysis() {
                    println!("📤 Uploading {} for analysis...", image.file_name);

                    let client = self.http.clone();
                    return Task::perform(
                        async move {
                            net::client::analyze_image(&client, image)
                                .await
                                .map_err(|err| err.to_string())
                        },
                        move |outcome| Message::AnalysisFinished(seq, outcome),
                    );
                }

                Task::none()
            }
            Message::AnalysisFinished(seq, outcome) => {
                match &outcome {
                    Ok(_) => println!("✅ Analysis complete"),
                    Err(message) => eprintln!("⚠️  Analysis failed: {}", message),
                }

                self.session.finish_analysis(seq, outcome);

                // A re-analysis can drop the detailed breakdown out from
                // under the active tab
                if let Some(result) = self.session.result() {
                    if !self.presenter.active_tab().is_available(result) {
                        self.presenter.select_tab(Tab::Description);
                    }
                }

                Task::none()
            }
            Message::TabSelected(tab) => {
                self.presenter.select_tab(tab);

                Task::none()
            }
            Message::CopyPressed(tab) => {
                let Some(content) = self
                    .session
                    .result()
                    .and_then(|result| state::presenter::render_content(tab, result))
                else {
                    return Task::none();
                };

                let generation = self.presenter.mark_copied(tab);

                Task::batch([
                    iced::clipboard::write(content),
                    Task::perform(copy_feedback_delay(), move |_| {
                        Message::CopyExpired(tab, generation)
                    }),
                ])
            }
            Message::CopyExpired(tab, generation) => {
                self.presenter.copy_expired(tab, generation);

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut page = column![
            text("AI Image Analysis & Prompt Generator").size(36),
            text("Upload an image to generate multiple prompt formats for AI image/video generation")
                .size(16),
            ui::upload::upload_pane(&self.session),
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center)
        .max_width(900);

        // The tabs exist over any displayable result, which stays usable
        // while a re-submission is in flight
        if let Some(result) = self.session.result() {
            page = page.push(ui::results::results_pane(result, &self.presenter));
        }

        scrollable(
            container(page)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Prompt Lens",
        PromptLens::update,
        PromptLens::view,
    )
    .theme(PromptLens::theme)
    .centered()
    .run_with(PromptLens::new)
}

/// Async function to read a validated selection into memory
/// Runs in the background to avoid blocking the UI
async fn load_selected_image(path: PathBuf, mime: String) -> Result<SelectedImage, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| err.to_string())?;

    Ok(SelectedImage::new(path, mime, bytes))
}

/// One-shot delay after which a copy acknowledgment reverts
async fn copy_feedback_delay() {
    tokio::time::sleep(Duration::from_millis(COPY_FEEDBACK_MILLIS)).await;
}
