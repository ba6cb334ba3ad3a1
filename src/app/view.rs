//! DOM tree of the calculator and how derived state is written into it.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlDivElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use super::timer::TooltipTimer;
use crate::a11y::ZOOM_WARNING;
use crate::calculator::CalculatorSnapshot;
use crate::config::DisplayOptions;
use crate::css::{format_number, ClampExpression};
use crate::error::{FluidError, Result};
use crate::feedback::CopyFeedback;
use crate::scale::Field;

const STYLESHEET: &str = "
.fluid-sizes { max-width: 800px; margin: 0 auto; padding: 0 16px; line-height: 1.6; }
.fluid-sizes h1 { text-align: center; font-size: clamp(2.5rem, 3.2vw + 2rem, 4rem); }
.fluid-sizes .inputs { display: grid; grid-template-columns: 1fr 2fr; gap: 8px; align-items: baseline; max-width: 600px; margin: 0 auto 20px; }
.fluid-sizes .inputs input { width: 4em; }
.fluid-sizes pre { position: relative; max-width: 600px; margin: 0 auto 12px; padding: 16px 12px; border-radius: 8px; background: hsl(180deg 10% 93%); white-space: pre-wrap; }
.fluid-sizes pre button { position: absolute; top: 8px; right: 8px; }
.fluid-sizes .tooltip { position: absolute; top: -28px; right: 0; padding: 2px 8px; border-radius: 4px; background: #333; color: #fff; font-size: 0.8rem; }
.fluid-sizes .warning { max-width: 600px; margin: 0 auto 24px; padding: 12px 16px; border-left: 4px solid hsl(30deg 100% 50%); background: hsl(30deg 100% 95%); }
.fluid-sizes .error { max-width: 600px; margin: 0 auto 24px; color: hsl(0deg 80% 40%); }
.fluid-sizes textarea { display: block; width: 100%; border: none; resize: vertical; font-family: inherit; }
";

/// One `<pre>` with a declaration, a copy button and its tooltip.
pub(crate) struct CodeBlock {
    pre: HtmlElement,
    code: HtmlElement,
    button: HtmlButtonElement,
    tooltip: HtmlElement,
    pub(crate) feedback: CopyFeedback,
    pub(crate) timer: TooltipTimer,
}

impl CodeBlock {
    fn build(document: &Document) -> Result<Self> {
        let pre: HtmlElement = create(document, "pre", "code-block")?;
        let code: HtmlElement = create(document, "code", "")?;
        let button: HtmlButtonElement = create(document, "button", "copy")?;
        button.set_type("button");
        button.set_text_content(Some("Copy"));
        button.set_attribute("aria-label", "Copy to clipboard")?;
        let tooltip: HtmlElement = create(document, "span", "tooltip")?;
        tooltip.set_attribute("role", "status")?;
        set_visible(&tooltip, false);

        pre.append_child(&code)?;
        pre.append_child(&button)?;
        pre.append_child(&tooltip)?;

        Ok(Self {
            pre,
            code,
            button,
            tooltip,
            feedback: CopyFeedback::default(),
            timer: TooltipTimer::new(),
        })
    }

    pub(crate) fn show_tooltip(&self, message: &str) {
        self.tooltip.set_text_content(Some(message));
        set_visible(&self.tooltip, true);
    }

    pub(crate) fn hide_tooltip(&self) {
        set_visible(&self.tooltip, false);
    }
}

pub(crate) struct View {
    root: HtmlDivElement,
    inputs: Vec<(Field, HtmlInputElement)>,
    blocks: Vec<CodeBlock>,
    error: HtmlElement,
    warning: HtmlElement,
    preview: HtmlTextAreaElement,
    preview_size: HtmlElement,
}

impl View {
    pub(crate) fn build(container: &HtmlElement, options: &DisplayOptions) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| FluidError::Dom("no document".into()))?;

        let root: HtmlDivElement = create(&document, "div", "fluid-sizes")?;
        let style: Element = create(&document, "style", "")?;
        style.set_text_content(Some(STYLESHEET));
        root.append_child(&style)?;

        let heading: HtmlElement = create(&document, "h1", "")?;
        heading.set_text_content(Some("Fluid Sizes"));
        root.append_child(&heading)?;

        let grid: HtmlDivElement = create(&document, "div", "inputs")?;
        let mut inputs = Vec::with_capacity(Field::ALL.len());
        for (title, size_field, width_field) in [
            ("Minimum size", Field::MinSize, Field::MinWidth),
            ("Maximum size", Field::MaxSize, Field::MaxWidth),
        ] {
            let h2: HtmlElement = create(&document, "h2", "")?;
            h2.set_text_content(Some(title));
            grid.append_child(&h2)?;

            let row: HtmlElement = create(&document, "p", "")?;
            for (field, suffix) in [
                (size_field, " at a viewport width of "),
                (width_field, "."),
            ] {
                let input: HtmlInputElement = create(&document, "input", "")?;
                input.set_type("text");
                input.set_attribute("inputmode", "decimal")?;
                input.set_attribute("aria-label", &format!("{title} ({})", field.unit()))?;
                input.set_value(&format_number(options.initial.get(field)));
                row.append_child(&input)?;

                let unit: HtmlElement = create(&document, "code", "")?;
                unit.set_text_content(Some(field.unit()));
                row.append_child(&unit)?;

                let tail: HtmlElement = create(&document, "span", "")?;
                tail.set_text_content(Some(suffix));
                row.append_child(&tail)?;

                inputs.push((field, input));
            }
            grid.append_child(&row)?;
        }
        root.append_child(&grid)?;

        let error: HtmlElement = create(&document, "p", "error")?;
        error.set_attribute("role", "alert")?;
        set_visible(&error, false);
        root.append_child(&error)?;

        // Bare expression first, then one block per configured property
        let mut blocks = Vec::with_capacity(options.properties.len() + 1);
        for _ in 0..=options.properties.len() {
            let block = CodeBlock::build(&document)?;
            root.append_child(&block.pre)?;
            blocks.push(block);
        }

        let warning: HtmlElement = create(&document, "div", "warning")?;
        warning.set_text_content(Some(ZOOM_WARNING));
        set_visible(&warning, false);
        root.append_child(&warning)?;

        let preview: HtmlTextAreaElement = create(&document, "textarea", "preview")?;
        preview.set_rows(2);
        preview.set_value(&options.preview_text);
        preview.set_attribute("aria-label", "Preview text")?;
        root.append_child(&preview)?;

        let preview_size: HtmlElement = create(&document, "p", "preview-size")?;
        root.append_child(&preview_size)?;

        container.append_child(&root)?;

        Ok(Self {
            root,
            inputs,
            blocks,
            error,
            warning,
            preview,
            preview_size,
        })
    }

    pub(crate) fn inputs(&self) -> Vec<(Field, HtmlInputElement)> {
        self.inputs.clone()
    }

    pub(crate) fn copy_buttons(&self) -> Vec<HtmlButtonElement> {
        self.blocks.iter().map(|b| b.button.clone()).collect()
    }

    pub(crate) fn block_mut(&mut self, index: usize) -> Option<&mut CodeBlock> {
        self.blocks.get_mut(index)
    }

    /// Overwrite a field's text after a programmatic change.
    pub(crate) fn show_input(&self, field: Field, value: f64) {
        if let Some((_, input)) = self.inputs.iter().find(|(f, _)| *f == field) {
            input.set_value(&format_number(value));
        }
    }

    pub(crate) fn render(
        &mut self,
        snapshot: &CalculatorSnapshot,
        clamp: Option<&ClampExpression>,
        viewport_width: f64,
    ) {
        match &snapshot.error {
            Some(message) => {
                self.error.set_text_content(Some(message));
                set_visible(&self.error, true);
            }
            None => set_visible(&self.error, false),
        }

        for (index, block) in self.blocks.iter().enumerate() {
            match snapshot.declarations.get(index) {
                Some(text) => {
                    block.code.set_text_content(Some(text));
                    set_visible(&block.pre, true);
                }
                None => set_visible(&block.pre, false),
            }
        }

        set_visible(&self.warning, snapshot.warning);

        let style = self.preview.style();
        match clamp {
            Some(clamp) => {
                let _ = style.set_property("font-size", &clamp.to_string());
            }
            None => {
                let _ = style.remove_property("font-size");
            }
        }

        let readout = snapshot
            .preview_size_rem
            .map(|rem| {
                format!(
                    "{}rem at a window width of {}px",
                    format_number((rem * 100.0).round() / 100.0),
                    format_number(viewport_width)
                )
            })
            .unwrap_or_default();
        self.preview_size.set_text_content(Some(&readout));
    }
}

impl Drop for View {
    fn drop(&mut self) {
        if let Some(parent) = self.root.parent_node() {
            let _ = parent.remove_child(&self.root);
        }
    }
}

fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| FluidError::Dom(format!("<{tag}> has an unexpected element type")))
}

fn set_visible(element: &HtmlElement, visible: bool) {
    let style = element.style();
    let _ = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
}
