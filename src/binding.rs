use tracing::debug;

use crate::display::{Container, Renderer};
use crate::error::AppError;
use crate::filter::FilterQuery;
use crate::models::{Source, TagUniverse};
use crate::pipeline::Pipeline;

pub const ALL_TAGS_LABEL: &str = "All Tags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    SearchInput(String),
    SourceChanged(Option<Source>),
    TagChanged(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Search,
    Source,
    Tag,
}

impl Control {
    /// Command that drives this control and what it does.
    pub fn usage(&self) -> (&'static str, &'static str) {
        match self {
            Control::Search => ("search <text>", "filter by name (empty clears)"),
            Control::Source => ("source <codeforces|uva|all>", "filter by source"),
            Control::Tag => ("tag <name|all>", "filter by tag"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    /// Empty for the "All Tags" default.
    pub value: String,
    pub label: String,
}

/// The search box, source selector and (once populated) tag selector.
#[derive(Debug, Clone, Default)]
pub struct FilterControls {
    search: String,
    source: Option<Source>,
    tag: Option<String>,
    tag_options: Vec<TagOption>,
}

impl FilterControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the tag selector: the default first, then one option per tag.
    pub fn populate_tags(&mut self, tags: &TagUniverse) {
        self.tag_options.clear();
        self.tag_options.push(TagOption {
            value: String::new(),
            label: ALL_TAGS_LABEL.to_string(),
        });
        self.tag_options.extend(tags.iter().map(|tag| TagOption {
            value: tag.to_string(),
            label: tag.to_string(),
        }));
    }

    /// Controls in display order. The tag selector sits right after the source
    /// selector and only appears once populated.
    pub fn layout(&self) -> Vec<Control> {
        let mut controls = vec![Control::Search, Control::Source];
        if !self.tag_options.is_empty() {
            controls.push(Control::Tag);
        }
        controls
    }

    pub fn tag_options(&self) -> &[TagOption] {
        &self.tag_options
    }

    /// Event for choosing `value` in the source selector, if it is an option.
    pub fn select_source(&self, value: &str) -> Option<ControlEvent> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Some(ControlEvent::SourceChanged(None));
        }
        Source::parse(value).map(|source| ControlEvent::SourceChanged(Some(source)))
    }

    /// Event for choosing `value` in the tag selector, if it is an option.
    /// A real tag wins over the `all` shorthand for the default.
    pub fn select_tag(&self, value: &str) -> Option<ControlEvent> {
        let value = value.trim();
        if let Some(option) = self
            .tag_options
            .iter()
            .find(|option| !option.value.is_empty() && option.value == value)
        {
            return Some(ControlEvent::TagChanged(Some(option.value.clone())));
        }
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Some(ControlEvent::TagChanged(None));
        }
        None
    }

    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SearchInput(text) => self.search = text,
            ControlEvent::SourceChanged(source) => self.source = source,
            ControlEvent::TagChanged(tag) => self.tag = tag.filter(|t| !t.is_empty()),
        }
    }

    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            search: self.search.clone(),
            source: self.source,
            tag: self.tag.clone(),
        }
    }
}

/// Keeps the rendered container in sync with the controls.
pub struct Binding<'a, C: Container> {
    pipeline: &'a Pipeline,
    controls: FilterControls,
    renderer: Renderer,
    container: C,
    matched: usize,
}

impl<'a, C: Container> Binding<'a, C> {
    /// Populates the tag selector and performs the first render.
    pub fn init(
        pipeline: &'a Pipeline,
        mut controls: FilterControls,
        renderer: Renderer,
        container: C,
    ) -> Result<Self, AppError> {
        controls.populate_tags(&pipeline.tags);
        let mut binding = Self {
            pipeline,
            controls,
            renderer,
            container,
            matched: 0,
        };
        binding.refresh()?;
        Ok(binding)
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    /// Match count of the latest render.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Applies one control change, then filters the full collection and
    /// re-renders. Returns the match count.
    pub fn on_change(&mut self, event: ControlEvent) -> Result<usize, AppError> {
        debug!("Control changed: {:?}", event);
        self.controls.apply(event);
        self.refresh()
    }

    fn refresh(&mut self) -> Result<usize, AppError> {
        let matches = self.controls.query().apply(&self.pipeline.problems);
        debug!("{} of {} problems match", matches.len(), self.pipeline.problems.len());
        self.renderer.render_into(&mut self.container, &matches)?;
        self.matched = matches.len();
        Ok(self.matched)
    }

    #[cfg(test)]
    pub fn into_container(self) -> C {
        self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Terminal;
    use crate::models::OutputFormat;
    use crate::test_support::sample_payloads;

    fn pipeline() -> Pipeline {
        Pipeline::from_payloads(&sample_payloads()).unwrap()
    }

    fn json_renderer() -> Renderer {
        Renderer::new(OutputFormat::Json, "now")
    }

    #[derive(Default)]
    struct Recorder {
        renders: Vec<String>,
    }

    impl Container for Recorder {
        fn replace(&mut self, rendered: &str) -> std::io::Result<()> {
            self.renders.push(rendered.to_string());
            Ok(())
        }
    }

    fn ids(render: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(render).unwrap();
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect()
    }

    fn init(pipeline: &Pipeline) -> Binding<'_, Recorder> {
        Binding::init(pipeline, FilterControls::new(), json_renderer(), Recorder::default())
            .unwrap()
    }

    #[test]
    fn test_init_populates_tags_and_renders_everything() {
        let pipeline = pipeline();
        let binding = init(&pipeline);

        let labels: Vec<&str> = binding
            .controls()
            .tag_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec![ALL_TAGS_LABEL, "math", "dp"]);
        assert_eq!(
            binding.controls().layout(),
            vec![Control::Search, Control::Source, Control::Tag]
        );

        let recorder = binding.into_container();
        assert_eq!(recorder.renders.len(), 1);
        assert_eq!(ids(&recorder.renders[0]), vec!["1_A", "2_B", "100"]);
    }

    #[test]
    fn test_unpopulated_controls_have_no_tag_selector() {
        assert_eq!(
            FilterControls::new().layout(),
            vec![Control::Search, Control::Source]
        );
    }

    #[test]
    fn test_every_change_rerenders_from_full_collection() {
        let pipeline = pipeline();
        let mut binding = init(&pipeline);

        let search = |text: &str| ControlEvent::SearchInput(text.to_string());
        assert_eq!(binding.on_change(search("the")).unwrap(), 2);
        assert_eq!(
            binding
                .on_change(ControlEvent::SourceChanged(Some(Source::Uva)))
                .unwrap(),
            1
        );
        assert_eq!(binding.on_change(ControlEvent::SourceChanged(None)).unwrap(), 2);
        assert_eq!(binding.on_change(search("")).unwrap(), 3);
        assert_eq!(
            binding
                .on_change(ControlEvent::TagChanged(Some("dp".to_string())))
                .unwrap(),
            1
        );

        let recorder = binding.into_container();
        assert_eq!(recorder.renders.len(), 6);
        assert_eq!(ids(&recorder.renders[1]), vec!["1_A", "100"]);
        assert_eq!(ids(&recorder.renders[2]), vec!["100"]);
        assert_eq!(ids(&recorder.renders[5]), vec!["2_B"]);
    }

    #[test]
    fn test_no_matches_renders_empty_list() {
        let pipeline = pipeline();
        let mut binding = init(&pipeline);
        assert_eq!(binding.matched(), 3);
        assert_eq!(
            binding
                .on_change(ControlEvent::SearchInput("zzz".to_string()))
                .unwrap(),
            0
        );
        assert_eq!(binding.matched(), 0);
        let recorder = binding.into_container();
        assert!(ids(recorder.renders.last().unwrap()).is_empty());
    }

    #[test]
    fn test_selectors_only_offer_their_options() {
        let mut controls = FilterControls::new();
        controls.populate_tags(&pipeline().tags);

        assert_eq!(
            controls.select_tag("dp"),
            Some(ControlEvent::TagChanged(Some("dp".to_string())))
        );
        assert_eq!(controls.select_tag("all"), Some(ControlEvent::TagChanged(None)));
        assert_eq!(controls.select_tag("geometry"), None);

        assert_eq!(
            controls.select_source("UVA"),
            Some(ControlEvent::SourceChanged(Some(Source::Uva)))
        );
        assert_eq!(controls.select_source(""), Some(ControlEvent::SourceChanged(None)));
        assert_eq!(controls.select_source("spoj"), None);
    }

    #[test]
    fn test_tag_named_all_is_selectable() {
        let mut tags = TagUniverse::new();
        tags.insert("all");
        tags.insert("dp");
        let mut controls = FilterControls::new();
        controls.populate_tags(&tags);

        assert_eq!(
            controls.select_tag("all"),
            Some(ControlEvent::TagChanged(Some("all".to_string())))
        );
        assert_eq!(controls.select_tag(""), Some(ControlEvent::TagChanged(None)));
    }

    #[test]
    fn test_preset_controls_shape_first_render() {
        let pipeline = pipeline();
        let mut controls = FilterControls::new();
        controls.apply(ControlEvent::SourceChanged(Some(Source::Codeforces)));
        controls.apply(ControlEvent::TagChanged(Some("math".to_string())));

        let renderer = Renderer::new(OutputFormat::Text, "now");
        let binding =
            Binding::init(&pipeline, controls, renderer, Terminal::new(Vec::new())).unwrap();
        let text = String::from_utf8(binding.into_container().into_inner()).unwrap();
        assert!(text.contains("Theatre Square"));
        assert!(text.contains("Two Sum"));
        assert!(!text.contains("3n+1"));
    }
}
