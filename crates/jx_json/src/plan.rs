//! Field resolution: from a record's descriptor to its wire-level plan.

use core::any::TypeId;

use jx_reflect::info::{StructInfo, TypeInfo};
use jx_utils::hash::{HashMap, HashSet};

// -----------------------------------------------------------------------------
// PlannedField

/// One encodable member of a record, possibly reached through embedded
/// records.
#[derive(Debug, Clone)]
pub struct PlannedField {
    name: String,
    path: Box<[usize]>,
    omit_empty: Option<bool>,
    tagged: bool,
}

impl PlannedField {
    /// The wire name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member indices from the root record, one per embedded hop plus the
    /// member itself.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The member's own omit-empty override.
    #[inline]
    pub const fn omit_empty(&self) -> Option<bool> {
        self.omit_empty
    }

    /// Whether the wire name came from an explicit rename.
    #[inline]
    pub const fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// The embedding depth, `0` for the record's own members.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }
}

// -----------------------------------------------------------------------------
// FieldPlan

/// The resolved, name-deduplicated member list of a record type.
///
/// Plans only depend on the type and the key transform, never on the other
/// configuration flags, so one plan serves every configuration derived from
/// the same root.
///
/// # Examples
///
/// ```
/// use jx_json::Json;
/// use jx_reflect::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Base { id: u64, name: String }
///
/// #[derive(Reflect, Default)]
/// struct User {
///     #[reflect(embed)]
///     base: Base,
///     #[reflect(rename = "mail")]
///     email: String,
/// }
///
/// let plan = Json::new().field_plan::<User>().unwrap();
/// let names: Vec<_> = plan.fields().iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["id", "name", "mail"]);
/// assert_eq!(plan.get("name").unwrap().path(), [0, 1]);
/// assert_eq!(plan.find("MAIL").unwrap().name(), "mail");
/// ```
#[derive(Debug)]
pub struct FieldPlan {
    type_path: &'static str,
    fields: Box<[PlannedField]>,
    by_name: HashMap<String, usize>,
}

impl FieldPlan {
    /// The planned record's type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Planned fields, in declaration order with embedded members at their
    /// point of embedding.
    #[inline]
    pub fn fields(&self) -> &[PlannedField] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field whose wire name is exactly `name`.
    pub fn get(&self, name: &str) -> Option<&PlannedField> {
        self.by_name.get(name).map(|&index| &self.fields[index])
    }

    /// Matches an input object key: exact name first, then the first field
    /// in plan order whose name equals `key` ignoring case.
    pub fn find(&self, key: &str) -> Option<&PlannedField> {
        self.get(key)
            .or_else(|| self.fields.iter().find(|field| eq_fold(&field.name, key)))
    }
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// -----------------------------------------------------------------------------
// resolve

struct Candidate {
    field: PlannedField,
    depth: usize,
}

/// Computes the plan of `info` under the optional key transform.
///
/// Members are visited breadth-first by embedding depth. Among members
/// sharing a wire name only the shallowest survive; a single survivor wins,
/// otherwise a single renamed survivor wins, otherwise the name is dropped.
pub(crate) fn resolve(
    info: &'static StructInfo,
    key_fn: Option<&(dyn Fn(&str) -> String + Send + Sync)>,
) -> FieldPlan {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut expanded: HashSet<TypeId> = HashSet::default();

    let mut current: Vec<(&'static StructInfo, Vec<usize>)> = vec![(info, Vec::new())];
    let mut depth = 0;

    while !current.is_empty() {
        let mut next = Vec::new();

        for (record, prefix) in &current {
            if expanded.contains(&record.ty_id()) {
                continue;
            }

            for (index, member) in record.iter().enumerate() {
                let mut path = prefix.clone();
                path.push(index);

                if member.is_embedded()
                    && member.rename().is_none()
                    && let Some(inner) = embedded_record(member.type_info())
                {
                    next.push((inner, path));
                    continue;
                }

                let name = match (member.rename(), key_fn) {
                    (Some(rename), _) => rename.to_owned(),
                    (None, Some(key_fn)) => key_fn(member.name()),
                    (None, None) => member.name().to_owned(),
                };

                candidates.push(Candidate {
                    field: PlannedField {
                        name,
                        path: path.into_boxed_slice(),
                        omit_empty: member.omit_empty(),
                        tagged: member.rename().is_some(),
                    },
                    depth,
                });
            }
        }

        // Types are marked after the whole level so that one type embedded
        // twice at the same depth yields colliding names.
        expanded.extend(current.iter().map(|(record, _)| record.ty_id()));
        current = next;
        depth += 1;
    }

    candidates.sort_by(|a, b| {
        a.field
            .name
            .cmp(&b.field.name)
            .then(a.depth.cmp(&b.depth))
            .then(b.field.tagged.cmp(&a.field.tagged))
            .then(a.field.path.cmp(&b.field.path))
    });

    let mut fields = Vec::with_capacity(candidates.len());
    for group in candidates.chunk_by(|a, b| a.field.name == b.field.name) {
        let min_depth = group[0].depth;
        let dominant = group.iter().take_while(|c| c.depth == min_depth).count();

        if dominant == 1 || (group[0].field.tagged && !group[1].field.tagged) {
            fields.push(group[0].field.clone());
        } else {
            log::debug!(
                "dropping ambiguous field name {:?} in `{}`",
                group[0].field.name,
                info.type_path(),
            );
        }
    }

    fields.sort_by(|a: &PlannedField, b| a.path.cmp(&b.path));

    let by_name = fields
        .iter()
        .enumerate()
        .map(|(index, field)| (field.name.clone(), index))
        .collect();

    FieldPlan {
        type_path: info.type_path(),
        fields: fields.into_boxed_slice(),
        by_name,
    }
}

/// The record behind an embedded member, seen through one `Option`.
fn embedded_record(info: &'static TypeInfo) -> Option<&'static StructInfo> {
    match info {
        TypeInfo::Struct(record) => Some(record),
        TypeInfo::Optional(optional) => optional.inner_info().as_struct().ok(),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use jx_reflect::Reflect;
    use jx_reflect::info::Typed;

    use super::*;

    fn plan_of<T: Typed>() -> FieldPlan {
        resolve(T::type_info().as_struct().unwrap(), None)
    }

    fn names(plan: &FieldPlan) -> Vec<&str> {
        plan.fields().iter().map(PlannedField::name).collect()
    }

    #[derive(Reflect, Default)]
    struct A {
        name: String,
        a: i32,
    }

    #[derive(Reflect, Default)]
    struct B {
        name: String,
        b: i32,
    }

    #[derive(Reflect, Default)]
    struct Named {
        #[reflect(rename = "name")]
        label: String,
    }

    #[derive(Reflect, Default)]
    struct Sibling {
        #[reflect(embed)]
        a: A,
        #[reflect(embed)]
        b: B,
    }

    #[test]
    fn equal_depth_tie_is_dropped() {
        let plan = plan_of::<Sibling>();
        assert_eq!(names(&plan), ["a", "b"]);
        assert!(plan.get("name").is_none());
        assert!(plan.find("NAME").is_none());
    }

    #[derive(Reflect, Default)]
    struct Shallow {
        #[reflect(embed)]
        a: A,
        name: String,
    }

    #[test]
    fn shallower_member_wins() {
        let plan = plan_of::<Shallow>();
        assert_eq!(names(&plan), ["a", "name"]);
        assert_eq!(plan.get("name").unwrap().path(), [1]);
        assert_eq!(plan.get("a").unwrap().path(), [0, 1]);
        assert_eq!(plan.get("a").unwrap().depth(), 1);
    }

    #[derive(Reflect, Default)]
    struct TaggedTie {
        #[reflect(embed)]
        a: A,
        #[reflect(embed)]
        named: Named,
    }

    #[test]
    fn renamed_member_breaks_tie() {
        let plan = plan_of::<TaggedTie>();
        assert_eq!(names(&plan), ["a", "name"]);
        let name = plan.get("name").unwrap();
        assert_eq!(name.path(), [1, 0]);
        assert!(name.is_tagged());
    }

    #[derive(Reflect, Default)]
    struct TwoTagged {
        #[reflect(embed)]
        first: Named,
        #[reflect(embed)]
        second: Named,
    }

    #[test]
    fn same_type_twice_collides() {
        let plan = plan_of::<TwoTagged>();
        assert!(plan.is_empty());
    }

    #[derive(Reflect, Default)]
    struct Node {
        id: u32,
        #[reflect(embed)]
        next: Option<Box<Node>>,
    }

    #[test]
    fn recursive_embedding_terminates() {
        let plan = plan_of::<Node>();
        assert_eq!(names(&plan), ["id"]);
        assert_eq!(plan.get("id").unwrap().path(), [0]);
    }

    #[derive(Reflect, Default)]
    struct Wrapper {
        #[reflect(embed)]
        count: u32,
        #[reflect(embed, rename = "inner")]
        a: A,
        #[reflect(embed)]
        b: Option<B>,
    }

    #[test]
    fn non_record_or_renamed_embed_is_a_member() {
        let plan = plan_of::<Wrapper>();
        assert_eq!(names(&plan), ["count", "inner", "name", "b"]);
        assert_eq!(plan.get("name").unwrap().path(), [2, 0]);
    }

    #[derive(Reflect, Default)]
    struct Overrides {
        #[reflect(omit_empty)]
        always: String,
        #[reflect(omit_empty = false)]
        never: String,
        default: String,
    }

    #[test]
    fn omit_empty_overrides() {
        let plan = plan_of::<Overrides>();
        let flags: Vec<_> = plan.fields().iter().map(|f| f.omit_empty()).collect();
        assert_eq!(flags, [Some(true), Some(false), None]);
    }

    #[allow(non_snake_case)]
    #[derive(Reflect, Default)]
    struct Cased {
        Key: i32,
        #[reflect(rename = "key")]
        lower: i32,
        Other: i32,
    }

    #[test]
    fn exact_then_case_insensitive() {
        let plan = plan_of::<Cased>();
        assert_eq!(plan.find("key").unwrap().path(), [1]);
        assert_eq!(plan.find("Key").unwrap().path(), [0]);
        assert_eq!(plan.find("KEY").unwrap().path(), [0]);
        assert_eq!(plan.find("other").unwrap().name(), "Other");
        assert!(plan.find("missing").is_none());
    }

    #[test]
    fn key_transform_skips_renamed() {
        let key_fn: Arc<dyn Fn(&str) -> String + Send + Sync> =
            Arc::new(|name: &str| format!("x_{name}"));
        let plan = resolve(
            TaggedTie::type_info().as_struct().unwrap(),
            Some(&*key_fn),
        );
        assert_eq!(names(&plan), ["x_name", "x_a", "name"]);
    }

    #[test]
    fn unicode_fold() {
        assert!(!eq_fold("Straße", "STRASSE"));
        assert!(eq_fold("ÉCOLE", "école"));
        assert!(!eq_fold("ab", "abc"));
    }
}
