/// Marker id referenced by focused or highlighted edges.
pub const END_ARROW_MARKER: &str = "url(#end-arrow)";

/// Stroke width of the classified path, independent of edge thickness.
pub const CLASSIFIED_STROKE_WIDTH: f64 = 5.0;

/// Shadow stroke scales with edge thickness.
pub const SHADOW_STROKE_FACTOR: f64 = 10.0;

/// Display hints passed through from the layout for one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeHints {
	pub highlighted: bool,
	pub focused: bool,
	pub thickness: f64,
	pub source: String,
	pub target: String,
}

impl Default for EdgeHints {
	fn default() -> Self {
		Self {
			highlighted: false,
			focused: false,
			thickness: 1.0,
			source: String::new(),
			target: String::new(),
		}
	}
}

impl EdgeHints {
	/// Self-loops never get an arrow head.
	pub fn should_render_marker(&self) -> bool {
		(self.focused || self.highlighted) && self.source != self.target
	}

	pub fn group_class(&self) -> &'static str {
		if self.highlighted {
			"edge highlighted"
		} else {
			"edge"
		}
	}

	pub fn shadow_stroke_width(&self) -> f64 {
		SHADOW_STROKE_FACTOR * self.thickness
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hints(highlighted: bool, focused: bool, source: &str, target: &str) -> EdgeHints {
		EdgeHints {
			highlighted,
			focused,
			source: source.into(),
			target: target.into(),
			..EdgeHints::default()
		}
	}

	#[test]
	fn test_marker_needs_focus_or_highlight() {
		assert!(!hints(false, false, "a", "b").should_render_marker());
		assert!(hints(true, false, "a", "b").should_render_marker());
		assert!(hints(false, true, "a", "b").should_render_marker());
	}

	#[test]
	fn test_self_loop_has_no_marker() {
		assert!(!hints(true, true, "a", "a").should_render_marker());
	}

	#[test]
	fn test_group_class_and_shadow() {
		assert_eq!(hints(true, false, "a", "b").group_class(), "edge highlighted");
		assert_eq!(EdgeHints::default().group_class(), "edge");
		let thick = EdgeHints {
			thickness: 2.5,
			..EdgeHints::default()
		};
		assert_eq!(thick.shadow_stroke_width(), 25.0);
	}
}
