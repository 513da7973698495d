/// Result presentation state
///
/// The Presenter owns which tab is active and the transient "copied"
/// acknowledgment each copy button shows for a moment after use. The
/// rendering function below derives the literal text a tab displays,
/// which is also exactly what its copy button places on the clipboard.

use serde_json::Value;

use super::data::AnalysisResult;

/// How long a copy acknowledgment stays visible
pub const COPY_FEEDBACK_MILLIS: u64 = 2000;

/// The five display modes for one analysis result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Description,
    Json,
    Toon,
    Detailed,
    Cinematic,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Description,
        Tab::Json,
        Tab::Toon,
        Tab::Detailed,
        Tab::Cinematic,
    ];

    /// Tab bar label
    pub fn label(self) -> &'static str {
        match self {
            Tab::Description => "📝 Description",
            Tab::Json => "{ } JSON Format",
            Tab::Toon => "🎨 Cartoon Style",
            Tab::Detailed => "🔍 Detailed Prompt",
            Tab::Cinematic => "🎬 Cinematic",
        }
    }

    /// Heading shown above the tab content
    pub fn title(self) -> &'static str {
        match self {
            Tab::Description => "Image Description",
            Tab::Json => "JSON Prompt Structure",
            Tab::Toon => "Cartoon Style Prompt",
            Tab::Detailed => "Detailed Prompt Structure",
            Tab::Cinematic => "Cinematic Prompt",
        }
    }

    /// Copy button label in its resting state
    pub fn copy_label(self) -> &'static str {
        match self {
            Tab::Description => "📋 Copy Description",
            Tab::Json => "📋 Copy JSON",
            Tab::Toon => "📋 Copy Cartoon Prompt",
            Tab::Detailed => "📋 Copy Detailed Prompt",
            Tab::Cinematic => "📋 Copy Cinematic Prompt",
        }
    }

    /// Whether this tab can be offered for the given result
    ///
    /// Only the detailed tab is conditional: it needs the optional
    /// field → value breakdown.
    pub fn is_available(self, result: &AnalysisResult) -> bool {
        match self {
            Tab::Detailed => result.detailed_prompt.is_some(),
            _ => true,
        }
    }

    fn index(self) -> usize {
        match self {
            Tab::Description => 0,
            Tab::Json => 1,
            Tab::Toon => 2,
            Tab::Detailed => 3,
            Tab::Cinematic => 4,
        }
    }
}

/// Derive the literal text for one tab of a result
///
/// Returns None only for the detailed tab when the result has no
/// breakdown to show.
pub fn render_content(tab: Tab, result: &AnalysisResult) -> Option<String> {
    match tab {
        Tab::Description => Some(result.description.clone()),
        Tab::Toon => Some(result.toon_prompt.clone()),
        Tab::Cinematic => Some(result.cinematic_prompt.clone()),
        // 2-space indentation, keys in the order the service sent them
        Tab::Json => serde_json::to_string_pretty(&result.json_prompt).ok(),
        Tab::Detailed => {
            let detailed = result.detailed_prompt.as_ref()?;
            let lines: Vec<String> = detailed
                .iter()
                .map(|(key, value)| {
                    let value = match value {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    };
                    format!("{}: {}", key, value)
                })
                .collect();
            Some(lines.join("\n"))
        }
    }
}

/// Per-button copy acknowledgment
///
/// The generation pairs an expiry timer with the copy that started it, so
/// a timer that lost a race to a newer copy of the same field expires as
/// a no-op instead of cutting the newer acknowledgment short.
#[derive(Debug, Clone, Copy, Default)]
struct CopyFeedback {
    generation: u64,
    visible: bool,
}

/// Active tab plus the copy acknowledgment state of every tab
#[derive(Debug)]
pub struct Presenter {
    active: Tab,
    feedback: [CopyFeedback; Tab::ALL.len()],
}

impl Presenter {
    pub fn new() -> Self {
        Presenter {
            active: Tab::Description,
            feedback: [CopyFeedback::default(); Tab::ALL.len()],
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Show the acknowledgment for one tab's copy button
    ///
    /// Returns the generation the matching expiry must present.
    pub fn mark_copied(&mut self, tab: Tab) -> u64 {
        let state = &mut self.feedback[tab.index()];
        state.generation += 1;
        state.visible = true;
        state.generation
    }

    /// An acknowledgment timer fired; revert the label it belongs to
    pub fn copy_expired(&mut self, tab: Tab, generation: u64) {
        let state = &mut self.feedback[tab.index()];
        if state.generation == generation {
            state.visible = false;
        }
    }

    pub fn is_copied(&self, tab: Tab) -> bool {
        self.feedback[tab.index()].visible
    }

    /// Back to the default tab with no acknowledgments showing
    ///
    /// Generations keep counting up so a timer started before the reset
    /// can never match an acknowledgment made after it.
    pub fn reset(&mut self) {
        self.active = Tab::Description;
        for state in &mut self.feedback {
            state.visible = false;
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
