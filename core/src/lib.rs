pub mod carousel;
pub mod catalog;
pub mod consent;
pub mod contact;
pub mod lifecycle;
pub mod route;
pub mod scroll;
pub mod settings;
pub mod swipe;
pub mod visibility;

pub use carousel::{CarouselError, CyclicIndex, Slot, SlotPose};
pub use consent::{ConsentBootstrap, ConsentCapability, ConsentConfig, ConsentInit};
pub use contact::{tel_link, whatsapp_link, ContactForm, ContactStatus};
pub use lifecycle::{AutoAdvance, Scheduler, ScrollObserver, ViewportEvent, ViewportSource};
pub use route::{resolve, LegalSection, Resolved, Route, RouteError, NAV_ITEMS};
pub use scroll::{scroll_progress, ScrollMetrics};
pub use settings::{ContactDetails, MotionSettings};
pub use swipe::{SwipeDirection, SwipeTracker};
pub use visibility::CtaVisibility;
