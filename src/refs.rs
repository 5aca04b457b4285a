use pdf_writer::Ref;

/// The role each indirect object plays in the one-page document. Every role has a
/// fixed object number, so references can be written before the target object is.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    PageTree,
    Page,
    Font,
    Content,
}

impl RefType {
    /// Every role, in ascending object number order
    pub const ALL: [RefType; 5] = [
        RefType::Catalog,
        RefType::PageTree,
        RefType::Page,
        RefType::Font,
        RefType::Content,
    ];

    /// Number of indirect objects in the document, not counting the free object 0
    pub const COUNT: usize = RefType::ALL.len();

    pub fn number(self) -> i32 {
        match self {
            RefType::Catalog => 1,
            RefType::PageTree => 2,
            RefType::Page => 3,
            RefType::Font => 4,
            RefType::Content => 5,
        }
    }

    pub fn id(self) -> Ref {
        Ref::new(self.number())
    }

    /// `n 0 R`, the syntax for referring to this object from another one
    pub fn reference(self) -> String {
        format!("{} 0 R", self.number())
    }
}
