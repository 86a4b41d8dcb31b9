mod arrays;
mod boundary;
pub mod centerline;

pub use arrays::{
    member_segments, ArrayLayout, BuildArrays, MemberArray, MemberSegment, NodeLineArrays,
};
pub use boundary::BuildBoundary;
pub use centerline::{Centerline, Diagnostic, ExtractCenterline};
