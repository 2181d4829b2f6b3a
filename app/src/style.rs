//! Tailwind class sets for the invitation panels.
//!
//! Every panel variant maps to a fixed [`PanelStyle`]; nothing is assembled
//! at render time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    CallToAction,
    Error,
    Loading,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelStyle {
    pub container: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    /// Classes for the panel's navigational action, if it has one.
    pub action: Option<&'static str>,
}

#[must_use]
pub const fn panel(variant: Panel) -> PanelStyle {
    match variant {
        Panel::CallToAction => PanelStyle {
            container: "flex flex-col gap-4 items-center py-12 px-6 text-center rounded-2xl bg-rose-50 shadow-sm",
            heading: "text-3xl font-serif font-bold text-rose-900",
            body: "max-w-xl text-lg text-rose-700",
            action: Some(
                "inline-block py-3 px-8 font-semibold text-white rounded-full transition-all duration-300 bg-rose-600 hover:bg-rose-700",
            ),
        },
        Panel::Error => PanelStyle {
            container: "flex flex-col gap-3 items-center py-10 px-6 mx-auto max-w-md text-center rounded-xl border border-red-200 bg-red-50",
            heading: "text-2xl font-bold text-red-800",
            body: "text-red-600 whitespace-pre-wrap break-words",
            action: Some(
                "py-2 px-6 font-medium text-red-700 rounded-full border border-red-300 transition-colors duration-200 hover:bg-red-100",
            ),
        },
        Panel::Loading => PanelStyle {
            container: "flex absolute inset-0 flex-col gap-3 justify-center items-center m-auto",
            heading: "size-10 rounded-full border-4 border-rose-200 border-t-rose-600 animate-spin",
            body: "text-sm italic text-muted-foreground",
            action: None,
        },
    }
}
