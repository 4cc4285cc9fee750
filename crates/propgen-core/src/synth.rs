//! Deterministic code synthesis: [`ClassSpec`] in, C# source text out.
//!
//! The pipeline is a pure function composed of independently testable
//! stages: the using block, the base-list clause, the property block, and
//! the capability blocks, interpolated into a fixed class template at the
//! end. No stage touches the filesystem.
//!
//! ## Change-tracking semantics
//!
//! The generated aggregate flag is
//! `OR(last scalar setter's comparison, any trackable collection element
//! reporting changed)`. Each scalar setter *overwrites* `IsChanged` with its
//! own old-vs-new comparison, so the most recent setter call wins — setting
//! property A dirty and then property B back to its original value reports
//! the class clean again (modulo collection elements). That is deliberate
//! source behavior, kept as-is. `AcceptChanges()` resets only the manual
//! flag: it neither clears the original-value snapshots nor cascades into
//! collection elements.
//!
//! Collection elements contribute through a statically-checked contract:
//! `OfType<IChangeTracking>()` keeps exactly the elements that opted into
//! the capability, so elements without it never contribute and are never an
//! error.

use std::collections::BTreeSet;

use crate::domain::{ClassSpec, DomainError, Property};
use crate::text;

/// Render the complete source file for one class specification.
///
/// Validates the required-field invariant first; any violation rejects the
/// specification before a single line is rendered.
pub fn synthesize(spec: &ClassSpec) -> Result<String, DomainError> {
    spec.validate()?;

    let usings = render_usings(&spec.usings);
    let base_clause = render_base_clause(spec);
    let properties = text::indent(&render_properties(spec)?, 4)?;
    let capability_blocks = text::indent(&render_capability_blocks(spec)?, 4)?;

    Ok(format!(
        "{usings}

namespace {namespace}
{{
  [Serializable]
  public partial class {class_name}{base_clause}
  {{
{properties}

{capability_blocks}
  }}
}}",
        namespace = spec.namespace,
        class_name = spec.class_name,
    ))
}

/// Stage 1: the using block — deduplicated, lexicographically sorted, one
/// `using X;` line per entry.
fn render_usings(usings: &[String]) -> String {
    let unique: BTreeSet<&str> = usings.iter().map(String::as_str).collect();
    text::join(unique.into_iter().map(|u| format!("using {u};")), "\n")
}

/// Stage 2: the inheritance clause. Capabilities are checked in fixed order
/// (tracking, then notification); an empty list yields an empty string, a
/// non-empty one is prefixed with the clause separator.
fn render_base_clause(spec: &ClassSpec) -> String {
    let identifiers = text::join(
        spec.capabilities().iter().map(|cap| cap.identifier()),
        ", ",
    );
    if identifiers.is_empty() {
        identifiers
    } else {
        format!(" : {identifiers}")
    }
}

/// Stage 3: every property in declaration order, blank-line separated.
fn render_properties(spec: &ClassSpec) -> Result<String, DomainError> {
    let rendered = spec
        .properties
        .iter()
        .map(|prop| render_property(spec, prop))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(text::join(rendered, "\n\n"))
}

/// One property: collection-valued properties are read-only and
/// pre-initialized with no backing field; scalars get the backing field and
/// the accessor pair.
fn render_property(spec: &ClassSpec, prop: &Property) -> Result<String, DomainError> {
    if prop.is_collection {
        return Ok(format!(
            "public {ty} {name} {{ get; }} = new {ty}();",
            ty = prop.type_name,
            name = prop.name,
        ));
    }

    let setter = text::indent(&render_setter(spec, prop), 4)?;
    Ok(format!(
        "private {ty} {backing};
public {ty} {name}
{{
  get
  {{
    return this.{backing};
  }}
  set
  {{
{setter}
  }}
}}",
        ty = prop.type_name,
        name = prop.name,
        backing = prop.backing_field,
    ))
}

/// The scalar setter body. Three stages in fixed unconditional order, blank
/// line between each: assign, then (if tracking) snapshot-and-compare, then
/// (if notifying) raise. The notification is deliberately unconditional —
/// every set call raises, even when the value did not change.
fn render_setter(spec: &ClassSpec, prop: &Property) -> String {
    let mut stages = vec![format!("this.{} = value;", prop.backing_field)];

    if spec.change_tracking {
        stages.push(format!(
            "if (!this._originalValues.ContainsKey(nameof(this.{name})))
  this._originalValues[nameof(this.{name})] = this.{backing};

this.IsChanged = (value != ({ty}) this._originalValues[nameof(this.{name})]);",
            name = prop.name,
            backing = prop.backing_field,
            ty = prop.type_name,
        ));
    }

    if spec.property_changed {
        stages.push(format!("OnPropertyChanged(nameof(this.{}));", prop.name));
    }

    text::join(stages, "\n\n")
}

/// Stage 4: the capability implementation blocks, fixed order, blank line
/// between them. Empty when no capability is enabled.
fn render_capability_blocks(spec: &ClassSpec) -> Result<String, DomainError> {
    let mut blocks = Vec::new();

    if spec.change_tracking {
        blocks.push(render_change_tracking_block(spec)?);
    }
    if spec.property_changed {
        blocks.push(NOTIFICATION_BLOCK.to_string());
    }

    Ok(text::join(blocks, "\n\n"))
}

/// The `IChangeTracking` block: the snapshot dictionary, the manual flag,
/// the aggregate query, and `AcceptChanges`.
fn render_change_tracking_block(spec: &ClassSpec) -> Result<String, DomainError> {
    let expressions = text::indent(&changed_expressions(&spec.properties), 6)?;
    Ok(format!(
        "private readonly Dictionary<String, Object> _originalValues = new Dictionary<String, Object>();

#region IChangeTracking
private Boolean _isChanged = false;
public Boolean IsChanged
{{
  get
  {{
    return
{expressions};
  }}
  set
  {{
    this._isChanged = value;
  }}
}}

public void AcceptChanges() => this.IsChanged = false;
#endregion"
    ))
}

/// The disjunction behind the aggregate query: the manual flag, then one
/// term per collection-valued property probing its trackable elements.
fn changed_expressions(properties: &[Property]) -> String {
    let mut terms = vec!["this._isChanged".to_string()];
    terms.extend(
        properties
            .iter()
            .filter(|prop| prop.is_collection)
            .map(|prop| {
                format!(
                    "this.{}.OfType<IChangeTracking>().Any(p => p.IsChanged)",
                    prop.name
                )
            }),
    );
    text::join(terms, " ||\n")
}

/// The `INotifyPropertyChanged` block. Raising with a property name invokes
/// every current subscriber; with no subscribers the raise is a no-op.
const NOTIFICATION_BLOCK: &str = "#region INotifyPropertyChanged
public event PropertyChangedEventHandler PropertyChanged;

protected void OnPropertyChanged(string name)
{
  PropertyChanged?.Invoke(this, new PropertyChangedEventArgs(name));
}
#endregion";

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn spec_with(properties: Vec<Property>) -> ClassSpec {
        ClassSpec {
            namespace: "Acme.Models".into(),
            class_name: "Widget".into(),
            output_path: PathBuf::from("/tmp/Widget.cs"),
            properties,
            ..ClassSpec::default()
        }
    }

    fn scalar(ty: &str, name: &str) -> Property {
        Property::parse(&format!("{ty} {name}")).unwrap()
    }

    fn collection(ty: &str, name: &str) -> Property {
        Property::parse(&format!("x {ty} {name}")).unwrap()
    }

    // ── using block ───────────────────────────────────────────────────────

    #[test]
    fn usings_are_deduplicated_and_sorted() {
        let mut spec = spec_with(vec![]);
        spec.usings.push("Acme.Common".into());
        spec.usings.push("System".into()); // duplicate of a default
        spec.usings.push("Acme.Common".into()); // duplicate of an append

        let block = render_usings(&spec.usings);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(
            lines,
            vec![
                "using Acme.Common;",
                "using System;",
                "using System.Collections.Generic;",
                "using System.ComponentModel;",
                "using System.Linq;",
            ]
        );
    }

    // ── base-list clause ──────────────────────────────────────────────────

    #[test]
    fn no_capabilities_yields_empty_clause() {
        assert_eq!(render_base_clause(&spec_with(vec![])), "");
    }

    #[test]
    fn single_capability_clause() {
        let mut spec = spec_with(vec![]);
        spec.property_changed = true;
        assert_eq!(render_base_clause(&spec), " : INotifyPropertyChanged");
    }

    #[test]
    fn both_capabilities_in_fixed_order() {
        let mut spec = spec_with(vec![]);
        spec.property_changed = true;
        spec.change_tracking = true;
        assert_eq!(
            render_base_clause(&spec),
            " : IChangeTracking, INotifyPropertyChanged"
        );
    }

    // ── property block ────────────────────────────────────────────────────

    #[test]
    fn collection_property_is_read_only_and_pre_initialized() {
        let spec = spec_with(vec![collection("List<Int32>", "Items")]);
        let block = render_properties(&spec).unwrap();
        assert_eq!(
            block,
            "public List<Int32> Items { get; } = new List<Int32>();"
        );
    }

    #[test]
    fn scalar_property_has_backing_field_and_accessors() {
        let spec = spec_with(vec![scalar("Int32", "Count")]);
        let block = render_properties(&spec).unwrap();
        assert!(block.starts_with("private Int32 _count;"));
        assert!(block.contains("public Int32 Count"));
        assert!(block.contains("return this._count;"));
        assert!(block.contains("this._count = value;"));
    }

    #[test]
    fn plain_setter_only_assigns() {
        let spec = spec_with(vec![]);
        let setter = render_setter(&spec, &scalar("Int32", "Count"));
        assert_eq!(setter, "this._count = value;");
    }

    #[test]
    fn tracking_setter_snapshots_then_overwrites_the_flag() {
        let mut spec = spec_with(vec![]);
        spec.change_tracking = true;
        let setter = render_setter(&spec, &scalar("Int32", "Count"));

        // Snapshot on first mutation only.
        assert!(setter.contains("if (!this._originalValues.ContainsKey(nameof(this.Count)))"));
        assert!(setter.contains("this._originalValues[nameof(this.Count)] = this._count;"));
        // Assignment, not |= — the most recent setter call wins.
        assert!(setter.contains(
            "this.IsChanged = (value != (Int32) this._originalValues[nameof(this.Count)]);"
        ));
        assert!(!setter.contains("|="));
    }

    #[test]
    fn notifying_setter_raises_unconditionally() {
        let mut spec = spec_with(vec![]);
        spec.property_changed = true;
        let setter = render_setter(&spec, &scalar("String", "Name"));
        assert!(setter.ends_with("OnPropertyChanged(nameof(this.Name));"));
        // No dirty-check gate around the raise.
        assert!(!setter.contains("if"));
    }

    #[test]
    fn setter_stage_order_is_assign_track_notify() {
        let mut spec = spec_with(vec![]);
        spec.change_tracking = true;
        spec.property_changed = true;
        let setter = render_setter(&spec, &scalar("Int32", "Count"));

        let assign = setter.find("this._count = value;").unwrap();
        let track = setter.find("this.IsChanged").unwrap();
        let notify = setter.find("OnPropertyChanged").unwrap();
        assert!(assign < track && track < notify);
    }

    // ── capability blocks ─────────────────────────────────────────────────

    #[test]
    fn no_capabilities_yields_no_blocks() {
        assert_eq!(render_capability_blocks(&spec_with(vec![])).unwrap(), "");
    }

    #[test]
    fn aggregate_query_includes_only_collection_properties() {
        let expressions = changed_expressions(&[
            scalar("Int32", "Count"),
            collection("List<Order>", "Orders"),
            collection("List<String>", "Tags"),
        ]);
        assert_eq!(
            expressions,
            "this._isChanged ||\n\
             this.Orders.OfType<IChangeTracking>().Any(p => p.IsChanged) ||\n\
             this.Tags.OfType<IChangeTracking>().Any(p => p.IsChanged)"
        );
    }

    #[test]
    fn aggregate_query_without_collections_is_just_the_flag() {
        assert_eq!(
            changed_expressions(&[scalar("Int32", "Count")]),
            "this._isChanged"
        );
    }

    #[test]
    fn tracking_block_has_snapshots_flag_and_accept() {
        let mut spec = spec_with(vec![collection("List<Order>", "Orders")]);
        spec.change_tracking = true;
        let block = render_change_tracking_block(&spec).unwrap();

        assert!(block.contains("Dictionary<String, Object> _originalValues"));
        assert!(block.contains("private Boolean _isChanged = false;"));
        assert!(block.contains("OfType<IChangeTracking>()"));
        // AcceptChanges resets the manual flag only.
        assert!(block.contains("public void AcceptChanges() => this.IsChanged = false;"));
        assert!(!block.contains("_originalValues.Clear"));
    }

    #[test]
    fn element_probe_uses_the_static_contract_not_reflection() {
        let expressions = changed_expressions(&[collection("List<Order>", "Orders")]);
        assert!(expressions.contains("OfType<IChangeTracking>()"));
        assert!(!expressions.contains("GetType()"));
        assert!(!expressions.contains("GetProperty"));
    }

    // ── full assembly ─────────────────────────────────────────────────────

    #[test]
    fn minimal_class_assembles() {
        let spec = spec_with(vec![scalar("Int32", "X")]);
        let source = synthesize(&spec).unwrap();

        assert!(source.contains("namespace Acme.Models"));
        assert!(source.contains("[Serializable]"));
        assert!(source.contains("public partial class Widget\n"));
        assert!(source.contains("private Int32 _x;"));
        assert!(source.contains("public Int32 X"));
        // No capability text anywhere.
        assert!(!source.contains("IChangeTracking"));
        assert!(!source.contains("INotifyPropertyChanged"));
        // Exactly the four default usings.
        let using_lines: Vec<&str> = source
            .lines()
            .filter(|l| l.starts_with("using "))
            .collect();
        assert_eq!(
            using_lines,
            vec![
                "using System;",
                "using System.Collections.Generic;",
                "using System.ComponentModel;",
                "using System.Linq;",
            ]
        );
    }

    #[test]
    fn class_body_is_indented_one_level() {
        let spec = spec_with(vec![scalar("Int32", "X")]);
        let source = synthesize(&spec).unwrap();
        assert!(source.contains("\n    private Int32 _x;"));
        assert!(source.contains("\n    public Int32 X"));
    }

    #[test]
    fn empty_property_list_still_assembles() {
        let source = synthesize(&spec_with(vec![])).unwrap();
        assert!(source.contains("public partial class Widget"));
        assert!(!source.contains("private "));
    }

    #[test]
    fn invalid_spec_is_rejected_before_rendering() {
        let mut spec = spec_with(vec![]);
        spec.class_name.clear();
        assert!(matches!(
            synthesize(&spec),
            Err(DomainError::MissingRequiredField { field: "classname" })
        ));
    }

    #[test]
    fn capability_blocks_are_separated_by_a_blank_line() {
        let mut spec = spec_with(vec![]);
        spec.change_tracking = true;
        spec.property_changed = true;
        let blocks = render_capability_blocks(&spec).unwrap();
        assert!(blocks.contains("#endregion\n\n#region INotifyPropertyChanged"));
    }
}
