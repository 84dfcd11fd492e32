//! Intermediate representation for contract assembly
//!
//! Every enabled capability resolves to a [`FeatureSpec`] describing what
//! it contributes to the final source file: an import, a base contract for
//! the inheritance list, constructor fragments, contract-level
//! declarations, new functions, and participation in shared override
//! hooks. The composers and the emitter consume these specs in resolution
//! order; nothing downstream re-inspects the feature flags, so inheritance
//! and override correctness is enforced in one place.

/// Virtual hooks that several inherited extensions may jointly override.
///
/// Solidity requires a single override definition per hook naming every
/// base that redefines it, so contributions are collected per hook and
/// merged into one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Update,
    Burn,
    TokenUri,
    BeforeTokenTransfer,
    IncreaseBalance,
}

impl Hook {
    pub fn solidity_name(&self) -> &'static str {
        match self {
            Hook::Update => "_update",
            Hook::Burn => "_burn",
            Hook::TokenUri => "tokenURI",
            Hook::BeforeTokenTransfer => "_beforeTokenTransfer",
            Hook::IncreaseBalance => "_increaseBalance",
        }
    }
}

/// Marks a base contract as redefining one of the shared hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideFragment {
    pub hook: Hook,
    /// Base contract to list in the merged `override(...)` clause.
    pub base: &'static str,
}

/// Position of a constructor parameter in the composed signature.
///
/// The composed parameter list is owner first, then the standard's
/// identity parameters, then trailing optionals, regardless of which spec
/// contributed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamSlot {
    Owner,
    Identity,
    Trailing,
}

/// A constructor parameter contributed by a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtorParam {
    /// Bare parameter name, used for de-duplication.
    pub name: &'static str,
    /// Full declaration as it appears in the signature.
    pub decl: &'static str,
    pub slot: ParamSlot,
}

impl CtorParam {
    pub fn owner() -> Self {
        Self {
            name: "initialOwner",
            decl: "address initialOwner",
            slot: ParamSlot::Owner,
        }
    }

    pub fn identity(name: &'static str, decl: &'static str) -> Self {
        Self {
            name,
            decl,
            slot: ParamSlot::Identity,
        }
    }

    pub fn trailing(name: &'static str, decl: &'static str) -> Self {
        Self {
            name,
            decl,
            slot: ParamSlot::Trailing,
        }
    }
}

/// A base contract added to the inheritance list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseContract {
    pub name: &'static str,
    /// Explicit base-constructor invocation, e.g. `ERC20(_name, _symbol)`
    /// or `EIP712(_name, "1")` for an indirect base. `None` when the base
    /// constructor is implicit.
    pub ctor_call: Option<String>,
}

/// Everything one resolved feature contributes to the generated contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpec {
    /// Resolution label, for diagnostics.
    pub label: &'static str,
    /// Solidity import path, when the contribution needs one.
    pub import: Option<&'static str>,
    pub base: Option<BaseContract>,
    pub ctor_params: Vec<CtorParam>,
    /// Constructor body statements, already formatted.
    pub ctor_body: Vec<String>,
    /// Contract-level declarations emitted before the constructor.
    pub state_decls: Vec<String>,
    /// Complete new function bodies, indented one level.
    pub functions: Vec<String>,
    pub overrides: Vec<OverrideFragment>,
}

impl FeatureSpec {
    /// Empty contribution; callers fill in the parts the feature provides.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            import: None,
            base: None,
            ctor_params: Vec::new(),
            ctor_body: Vec::new(),
            state_decls: Vec::new(),
            functions: Vec::new(),
            overrides: Vec::new(),
        }
    }
}
