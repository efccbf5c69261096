use anyhow::Result;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Event, EventTarget, HtmlElement, MediaQueryList, MediaQueryListEvent, MouseEvent, Node};

use ricenow_common::{
    Bounds, ClickRegion, EventSource, PointerSample, ShinePosition, Subscription,
    SystemColorScheme, Theme, ThemeAttribute,
    shine::{SHINE_X_VAR, SHINE_Y_VAR},
};

const THEME_ATTRIBUTE: &str = "data-theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow::Error::msg("no document available"))
}

// an unknown width is treated as desktop, so link clicks never close the menu by accident
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::INFINITY)
}

// data-theme on <html>, which the stylesheet keys its palette off
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentThemeAttribute;

impl ThemeAttribute for DocumentThemeAttribute {
    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        document()?
            .document_element()
            .ok_or_else(|| anyhow::Error::msg("document has no root element"))?
            .set_attribute(THEME_ATTRIBUTE, theme.as_str())
            .map_err(js_error)
    }
}

// capture-phase click listener on the whole document
//
// capture means we see every click before any element handler gets a chance
// to stop it, which is why targets have to be classified instead of relying on
// the toggle button swallowing its own click
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentClicks;

fn classify_click(document: &Document, target: Option<EventTarget>) -> ClickRegion {
    let Some(node) = target.and_then(|target| target.dyn_into::<Node>().ok()) else {
        return ClickRegion::Outside;
    };

    ClickRegion::classify(|id| {
        document
            .get_element_by_id(id)
            .is_some_and(|element| element.contains(Some(&node)))
    })
}

impl EventSource<ClickRegion> for DocumentClicks {
    fn subscribe(&self, mut handler: Box<dyn FnMut(&ClickRegion)>) -> Result<Subscription> {
        let document = document()?;
        let lookup = document.clone();

        let listener = Closure::wrap(Box::new(move |event: Event| {
            handler(&classify_click(&lookup, event.target()));
        }) as Box<dyn FnMut(Event)>);

        document
            .add_event_listener_with_callback_and_bool("click", listener.as_ref().unchecked_ref(), true)
            .map_err(js_error)?;

        Ok(Subscription::new(move || {
            if let Err(err) = document.remove_event_listener_with_callback_and_bool(
                "click",
                listener.as_ref().unchecked_ref(),
                true,
            ) {
                warn!("failed to remove document click listener: {}", js_error(err));
            }
        }))
    }
}

// matchMedia("(prefers-color-scheme: dark)")
//
// if matchMedia is unavailable we report "light" and refuse subscriptions
pub struct MediaColorScheme {
    query: Option<MediaQueryList>,
}

impl MediaColorScheme {
    pub fn new() -> Self {
        let query = web_sys::window().and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten());

        if query.is_none() {
            debug!("matchMedia unavailable, assuming light color scheme");
        }

        MediaColorScheme { query }
    }
}

impl EventSource<bool> for MediaColorScheme {
    fn subscribe(&self, mut handler: Box<dyn FnMut(&bool)>) -> Result<Subscription> {
        let query = self
            .query
            .clone()
            .ok_or_else(|| anyhow::Error::msg("matchMedia unavailable"))?;

        let listener = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            handler(&event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Subscription::new(move || {
            if let Err(err) = query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                warn!("failed to remove color scheme listener: {}", js_error(err));
            }
        }))
    }
}

impl SystemColorScheme for MediaColorScheme {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(|query| query.matches())
    }
}

// mousemove over the logo, and the sink that writes the shine variables back
#[derive(Clone)]
pub struct LogoPointer {
    element: HtmlElement,
}

impl LogoPointer {
    pub fn find(id: &str) -> Result<Self> {
        let element = document()?
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::Error::msg(format!("no element with id {id}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow::Error::msg(format!("element {id} is not an html element")))?;

        Ok(LogoPointer { element })
    }

    pub fn set_shine(&self, position: ShinePosition) {
        let style = self.element.style();

        let result = style
            .set_property(SHINE_X_VAR, &position.css_x())
            .and_then(|_| style.set_property(SHINE_Y_VAR, &position.css_y()));

        if let Err(err) = result {
            debug!("failed to set logo shine: {}", js_error(err));
        }
    }
}

impl EventSource<PointerSample> for LogoPointer {
    fn subscribe(&self, mut handler: Box<dyn FnMut(&PointerSample)>) -> Result<Subscription> {
        let element = self.element.clone();
        let measured = self.element.clone();

        let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = measured.get_bounding_client_rect();

            handler(&PointerSample {
                client_x: f64::from(event.client_x()),
                client_y: f64::from(event.client_y()),
                bounds: Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                },
            });
        }) as Box<dyn FnMut(MouseEvent)>);

        element
            .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Subscription::new(move || {
            if let Err(err) = element.remove_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref()) {
                warn!("failed to remove logo pointer listener: {}", js_error(err));
            }
        }))
    }
}
