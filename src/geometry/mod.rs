pub mod boundary;
pub mod member;

pub use boundary::{BoxBoundary, InnerProfile, OuterProfile};
pub use member::{CenterPoint, Member, MemberKind, Members, ThicknessSegment};
