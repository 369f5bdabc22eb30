//! Plain-text edge-list editor.
//!
//! A thin wrapper around a textarea: it holds the raw text and reports the
//! complete current value (not a diff) on every input event. Debouncing is
//! the caller's concern.

use leptos::prelude::*;

/// Textarea bound to the graph's edge-list source text.
#[component]
pub fn Editor(
	/// Initial contents of the textarea.
	#[prop(into)] value: String,
	/// Invoked with the complete text on every edit.
	#[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
	view! {
		<div class="graphpad-editor">
			<textarea
				rows=8
				spellcheck="false"
				on:input=move |ev| on_change.run(event_target_value(&ev))
				style="width: 100%; box-sizing: border-box; font-family: monospace;"
			>
				{value}
			</textarea>
		</div>
	}
}
