pub mod breadcrumb;
pub mod labels;
pub mod resolve;

pub use breadcrumb::{Breadcrumbs, Crumb};
pub use labels::{parse_label_pairs, RouteLabels};
pub use resolve::{is_uuid_like, resolve, title_case, BreadcrumbItem, DETAILS_LABEL, ROOT_LABEL, ROOT_SEGMENT};
