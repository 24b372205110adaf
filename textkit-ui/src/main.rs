use std::env;
use std::time::Duration;

use eframe::{egui, Frame};
use egui::{Color32, Context};

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Operation picked in the side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {
    Clean,
    Tokenize,
    Statistics,
    WordFrequency,
    NGrams,
    Sentiment,
}

impl Operation {
    const ALL: [Operation; 6] = [
        Operation::Clean,
        Operation::Tokenize,
        Operation::Statistics,
        Operation::WordFrequency,
        Operation::NGrams,
        Operation::Sentiment,
    ];

    fn label(&self) -> &'static str {
        match self {
            Operation::Clean => "Text Cleaning",
            Operation::Tokenize => "Tokenization",
            Operation::Statistics => "Text Statistics",
            Operation::WordFrequency => "Word Frequency",
            Operation::NGrams => "N-grams",
            Operation::Sentiment => "Sentiment Analysis",
        }
    }
}

#[derive(Debug, Deserialize)]
struct CleanResult {
    cleaned_text: String,
}

#[derive(Debug, Deserialize)]
struct TokensResult {
    tokens: Vec<String>,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct StatsResult {
    character_count: usize,
    character_count_no_spaces: usize,
    word_count: usize,
    unique_words: usize,
    sentence_count: usize,
    average_word_length: f64,
}

#[derive(Debug, Deserialize)]
struct WordFrequency {
    word: String,
    frequency: usize,
}

#[derive(Debug, Deserialize)]
struct WordFrequencyResult {
    word_frequencies: Vec<WordFrequency>,
    total_words: usize,
    unique_words: usize,
}

#[derive(Debug, Deserialize)]
struct NGramFrequency {
    ngram: String,
    frequency: usize,
}

#[derive(Debug, Deserialize)]
struct NGramResult {
    ngrams: Vec<NGramFrequency>,
    total_ngrams: usize,
    unique_ngrams: usize,
}

#[derive(Debug, Deserialize)]
struct SentimentResult {
    sentiment: String,
    score: f64,
    positive_words: usize,
    negative_words: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Last response shown in the results panel.
#[derive(Debug)]
enum Outcome {
    Cleaned(CleanResult),
    Tokens(TokensResult),
    Stats(StatsResult),
    Words(WordFrequencyResult),
    NGrams(NGramResult),
    Sentiment(SentimentResult),
    Error(String),
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: String) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(10, 0))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Sends a POST request with a JSON body and decodes the JSON answer.
    ///
    /// Non-2xx answers are turned into their `detail` message.
    fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, String> {
        let response = self.client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    format!("Cannot connect to API. Make sure the server is running on {}", self.base_url)
                } else {
                    e.to_string()
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match response.json::<ErrorBody>() {
                Ok(body) => format!("{status}: {}", body.detail),
                Err(_) => status.to_string(),
            });
        }
        response.json::<T>().map_err(|e| e.to_string())
    }
}

/// Global UI state (MUST persist between frames in egui).
struct DashboardUI {
    rest: RESTContext,
    operation: Operation,
    input: String,
    outcome: Option<Outcome>,

    // Cleaning
    lowercase: bool,
    remove_punctuation: bool,
    remove_numbers: bool,
    remove_extra_whitespace: bool,
    normalize_unicode: bool,

    // Tokenization
    method: &'static str,
    lowercase_tokens: bool,

    // Frequencies
    top_words: usize,
    ngram_n: usize,
    ngram_top_k: usize,
}

impl DashboardUI {
    /// Initializes the UI with sane defaults.
    fn new(rest: RESTContext) -> Self {
        Self {
            rest,
            operation: Operation::Clean,
            input: String::new(),
            outcome: None,

            lowercase: true,
            remove_punctuation: true,
            remove_numbers: false,
            remove_extra_whitespace: true,
            normalize_unicode: true,

            method: "word",
            lowercase_tokens: false,

            top_words: 15,
            ngram_n: 2,
            ngram_top_k: 10,
        }
    }

    /// Builds the endpoint path and JSON body for the current operation.
    fn build_request(&self) -> (&'static str, Value) {
        let text = self.input.as_str();
        match self.operation {
            Operation::Clean => ("/v1/clean", json!({
                "text": text,
                "lowercase": self.lowercase,
                "remove_punctuation": self.remove_punctuation,
                "remove_numbers": self.remove_numbers,
                "remove_extra_whitespace": self.remove_extra_whitespace,
                "normalize_unicode": self.normalize_unicode,
            })),
            Operation::Tokenize => ("/v1/tokenize", json!({
                "text": text,
                "method": self.method,
                "lowercase": self.lowercase_tokens,
            })),
            Operation::Statistics => ("/v1/stats", json!({ "text": text })),
            // All frequencies are fetched; the slider only limits what is drawn
            Operation::WordFrequency => ("/v1/word-frequency", json!({ "text": text })),
            Operation::NGrams => ("/v1/ngrams", json!({
                "text": text,
                "n": self.ngram_n,
                "top_k": self.ngram_top_k,
            })),
            Operation::Sentiment => ("/v1/sentiment", json!({ "text": text })),
        }
    }

    /// Performs the request for the current operation.
    fn process(&mut self) {
        if self.input.trim().is_empty() {
            self.outcome = Some(Outcome::Error("Please enter some text to process!".to_owned()));
            return;
        }

        let (path, body) = self.build_request();
        let outcome = match self.operation {
            Operation::Clean => self.rest.post(path, &body).map(Outcome::Cleaned),
            Operation::Tokenize => self.rest.post(path, &body).map(Outcome::Tokens),
            Operation::Statistics => self.rest.post(path, &body).map(Outcome::Stats),
            Operation::WordFrequency => self.rest.post(path, &body).map(Outcome::Words),
            Operation::NGrams => self.rest.post(path, &body).map(Outcome::NGrams),
            Operation::Sentiment => self.rest.post(path, &body).map(Outcome::Sentiment),
        };

        if let Err(e) = &outcome {
            log::warn!("{path} failed: {e}");
        }
        self.outcome = Some(outcome.unwrap_or_else(Outcome::Error));
    }

    /// Options of the selected operation.
    fn options_ui(&mut self, ui: &mut egui::Ui) {
        match self.operation {
            Operation::Clean => {
                ui.checkbox(&mut self.lowercase, "Lowercase");
                ui.checkbox(&mut self.remove_punctuation, "Remove punctuation");
                ui.checkbox(&mut self.remove_numbers, "Remove numbers");
                ui.checkbox(&mut self.remove_extra_whitespace, "Remove extra spaces");
                ui.checkbox(&mut self.normalize_unicode, "Normalize Unicode");
            }
            Operation::Tokenize => {
                ui.horizontal(|ui| {
                    for method in ["word", "sentence", "char"] {
                        ui.radio_value(&mut self.method, method, method);
                    }
                });
                ui.checkbox(&mut self.lowercase_tokens, "Lowercase tokens");
            }
            Operation::WordFrequency => {
                ui.add(egui::Slider::new(&mut self.top_words, 5..=50).text("Show top N words"));
            }
            Operation::NGrams => {
                ui.add(egui::Slider::new(&mut self.ngram_n, 2..=5).text("N-gram size"));
                ui.add(egui::Slider::new(&mut self.ngram_top_k, 5..=30).text("Show top N n-grams"));
            }
            Operation::Statistics | Operation::Sentiment => {
                ui.label("No options");
            }
        }
    }

    /// Draws horizontal frequency bars, longest first.
    fn bars_ui<'a>(ui: &mut egui::Ui, rows: impl Iterator<Item = (&'a str, usize)>) {
        let rows: Vec<(&str, usize)> = rows.collect();
        let max = rows.iter().map(|(_, f)| *f).max().unwrap_or(1).max(1);
        for (label, frequency) in rows {
            ui.add(
                egui::ProgressBar::new(frequency as f32 / max as f32)
                    .text(format!("{label} ({frequency})")),
            );
        }
    }

    /// Results panel content.
    fn outcome_ui(&self, ui: &mut egui::Ui) {
        let Some(outcome) = &self.outcome else {
            ui.label("Enter your text, pick an operation and click Process");
            return;
        };

        match outcome {
            Outcome::Error(e) => {
                ui.colored_label(Color32::RED, e);
            }
            Outcome::Cleaned(result) => {
                ui.label("Cleaned text:");
                let mut cleaned = result.cleaned_text.as_str();
                ui.add(egui::TextEdit::multiline(&mut cleaned).desired_rows(10));
            }
            Outcome::Tokens(result) => {
                ui.label(format!("Found {} tokens", result.count));
                let shown = result.tokens.len().min(50);
                ui.label(format!("{:?}", &result.tokens[..shown]));
                if result.tokens.len() > shown {
                    ui.label(format!("Showing first {shown} of {} tokens", result.tokens.len()));
                }
            }
            Outcome::Stats(stats) => {
                egui::Grid::new("stats_grid").num_columns(2).striped(true).show(ui, |ui| {
                    let rows = [
                        ("Characters", stats.character_count.to_string()),
                        ("Words", stats.word_count.to_string()),
                        ("Sentences", stats.sentence_count.to_string()),
                        ("Avg word length", format!("{:.2}", stats.average_word_length)),
                        ("Unique words", stats.unique_words.to_string()),
                        ("No spaces", stats.character_count_no_spaces.to_string()),
                    ];
                    for (name, value) in rows {
                        ui.label(name);
                        ui.label(value);
                        ui.end_row();
                    }
                });
            }
            Outcome::Words(result) => {
                ui.label(format!(
                    "{} words, {} unique. Top {}:",
                    result.total_words, result.unique_words, self.top_words
                ));
                Self::bars_ui(
                    ui,
                    result.word_frequencies.iter().take(self.top_words).map(|w| (w.word.as_str(), w.frequency)),
                );
            }
            Outcome::NGrams(result) => {
                ui.label(format!(
                    "Total n-grams: {}, unique n-grams: {}",
                    result.total_ngrams, result.unique_ngrams
                ));
                Self::bars_ui(ui, result.ngrams.iter().map(|g| (g.ngram.as_str(), g.frequency)));
            }
            Outcome::Sentiment(result) => {
                ui.heading(result.sentiment.to_uppercase());
                ui.label(format!(
                    "Positive words: {}   Negative words: {}   Score: {:.3}",
                    result.positive_words, result.negative_words, result.score
                ));
                // Gauge: -1 on the left, +1 on the right
                ui.add(
                    egui::ProgressBar::new(((result.score + 1.0) / 2.0) as f32)
                        .text(format!("{:.3}", result.score)),
                );
            }
        }
    }
}

impl eframe::App for DashboardUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::SidePanel::left("settings").show(ctx, |ui| {
            ui.heading("Settings");
            egui::ComboBox::from_label("Operation")
                .selected_text(self.operation.label())
                .show_ui(ui, |ui| {
                    for operation in Operation::ALL {
                        ui.selectable_value(&mut self.operation, operation, operation.label());
                    }
                });
            ui.separator();
            self.options_ui(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                columns[0].heading("Input Text");
                columns[0].add(
                    egui::TextEdit::multiline(&mut self.input)
                        .hint_text("Type or paste your text here...")
                        .desired_rows(18),
                );
                if columns[0]
                    .add_sized([200.0, 40.0], egui::Button::new("Process Text"))
                    .clicked()
                {
                    self.process();
                }

                columns[1].heading("Results");
                egui::ScrollArea::vertical().show(&mut columns[1], |ui| self.outcome_ui(ui));
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let base_url = env::var("TEXTKIT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "textkit",
        options,
        Box::new(|_| Ok(Box::new(DashboardUI::new(RESTContext::new(base_url)?)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> DashboardUI {
        DashboardUI::new(RESTContext::new(DEFAULT_API_URL.to_owned()).unwrap())
    }

    #[test]
    fn clean_request_sends_every_flag() {
        let mut ui = dashboard();
        ui.input = "Hello".to_owned();
        ui.remove_numbers = true;
        let (path, body) = ui.build_request();
        assert_eq!(path, "/v1/clean");
        assert_eq!(body["text"], "Hello");
        assert_eq!(body["remove_numbers"], true);
        assert_eq!(body["lowercase"], true);
    }

    #[test]
    fn ngram_request_carries_width_and_limit() {
        let mut ui = dashboard();
        ui.operation = Operation::NGrams;
        ui.ngram_n = 3;
        let (path, body) = ui.build_request();
        assert_eq!(path, "/v1/ngrams");
        assert_eq!(body["n"], 3);
        assert_eq!(body["top_k"], 10);
    }

    #[test]
    fn empty_input_is_not_sent() {
        let mut ui = dashboard();
        ui.input = "   ".to_owned();
        ui.process();
        assert!(matches!(ui.outcome, Some(Outcome::Error(_))));
    }
}
