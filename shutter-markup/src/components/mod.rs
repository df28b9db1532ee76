mod breadcrumb;
mod card;
mod collapse;
mod form;
mod icon;
mod input_group;
mod navbar;
mod skeleton;

pub use breadcrumb::{BreadcrumbLinkProps, breadcrumb_link};
pub use card::{CardBodyProps, card_body, card_sub_title, card_title};
pub use collapse::{CollapseProps, ToggleProps, collapse, toggle_button};
pub use form::{FormTextProps, form_text};
pub use icon::{IconProps, IconSet, icon, normalize_icon_name};
pub use input_group::{InputGroupAddonProps, input_group_append, input_group_prepend};
pub use navbar::{NavbarBrandProps, navbar_brand};
pub use skeleton::{SkeletonProps, skeleton};
