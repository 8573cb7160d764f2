use crate::*;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z01-9_]*$").unwrap());

/// Name used for a variable which is not part of a collection.
///
/// The first 26 variables use upper-case letters, the next ones are numbered.
pub(crate) fn default_name(uid: usize) -> String {
    match uid {
        0..=25 => char::from(b'A' + uid as u8).to_string(),
        _ => format!("V{}", uid),
    }
}

/// Names of the variables defining the state space.
///
/// The variable at position `i` of a term takes the `i`-th name of the collection.
/// Positions without an explicit name fall back on the default naming (`A`, `B`, ...).
///
/// ```
/// use qmkit::VarSpace;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let mut variables = VarSpace::default();
/// let x = variables.add("x")?;
/// let y = variables.add("y")?;
///
/// assert_eq!(format!("{}", variables.named(&y)), "y");
/// assert!(variables.add("2x").is_err());
///
/// variables.set_name(x, "carry")?;
/// assert_eq!(variables.get("carry"), Some(x));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug)]
pub struct VarSpace {
    /// The name of each position
    names: Vec<String>,

    /// Find a variable by name
    name2uid: HashMap<String, Variable>,
}

/// A named rule associates a rule to a variable collection to provide prettier display output
pub struct NamedRule<'a> {
    namer: &'a VarSpace,
    rule: &'a dyn Rule,
}

impl VarSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection using the default names for the first variables.
    pub fn alphabetic(count: usize) -> Self {
        let mut space = Self::default();
        for uid in 0..count {
            let name = default_name(uid);
            space.name2uid.insert(name.clone(), Variable(uid));
            space.names.push(name);
        }
        space
    }

    /// Create a collection from a list of names, given in variable order.
    pub fn from_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Result<Self, QmError> {
        let mut space = Self::default();
        for name in names {
            space.add(name.as_ref())?;
        }
        Ok(space)
    }

    /// Add a name for the next variable.
    ///
    /// Returns an error if the name is invalid or already used, in this case the collection is not modified.
    pub fn add(&mut self, name: &str) -> Result<Variable, QmError> {
        if !RE_NAME.is_match(name) {
            return Err(QmError::InvalidName(name.into()));
        }
        if self.name2uid.contains_key(name) {
            return Err(QmError::ConflictingName(name.into()));
        }
        let var = Variable(self.names.len());
        self.names.push(name.into());
        self.name2uid.insert(name.into(), var);
        Ok(var)
    }

    /// Change the name of an existing variable.
    ///
    /// Renaming to the same name is accepted (in this case, the collection is not changed)
    pub fn set_name(&mut self, v: Variable, name: &str) -> Result<Variable, QmError> {
        if v.uid() >= self.names.len() {
            return Err(QmError::NoSuchVariable(v));
        }

        // Reject invalid names
        if !RE_NAME.is_match(name) {
            return Err(QmError::InvalidName(name.into()));
        }

        // Detect conflicts or unchanged names
        if let Some(existing) = self.get(name) {
            if existing == v {
                return Ok(v);
            }
            return Err(QmError::ConflictingName(name.into()));
        }

        let old_name = std::mem::replace(&mut self.names[v.uid()], name.into());
        self.name2uid.remove(&old_name);
        self.name2uid.insert(name.into(), v);
        Ok(v)
    }

    /// Search a variable with the given name
    pub fn get(&self, name: &str) -> Option<Variable> {
        self.name2uid.get(name).copied()
    }

    /// Search a variable with the given name
    pub fn get_or_err(&self, name: &str) -> Result<Variable, QmError> {
        self.get(name)
            .ok_or_else(|| QmError::InvalidExpression(format!("unknown variable '{}'", name)))
    }

    /// Split a run of juxtaposed names into variables.
    ///
    /// SOP products are often written without separator (`ABC`), the run is split
    /// by repeatedly taking the longest known name at its start.
    pub fn split_run(&self, run: &str) -> Option<Vec<Variable>> {
        if let Some(var) = self.get(run) {
            return Some(vec![var]);
        }
        let mut result = vec![];
        let mut rest = run;
        while !rest.is_empty() {
            let (len, var) = self
                .name2uid
                .iter()
                .filter(|(name, _)| rest.starts_with(name.as_str()))
                .map(|(name, var)| (name.len(), *var))
                .max_by_key(|(len, _)| *len)?;
            result.push(var);
            rest = &rest[len..];
        }
        Some(result)
    }

    /// The name of a variable
    pub fn name(&self, var: Variable) -> String {
        match self.names.get(var.uid()) {
            Some(name) => name.clone(),
            None => default_name(var.uid()),
        }
    }

    pub fn format_variable(&self, f: &mut fmt::Formatter, var: Variable) -> fmt::Result {
        match self.names.get(var.uid()) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", var),
        }
    }

    /// Wrap a rule to display it with the names of this collection
    pub fn named<'a>(&'a self, rule: &'a dyn Rule) -> NamedRule<'a> {
        NamedRule { namer: self, rule }
    }

    /// Get the number of named variables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return whether there are no named variables in this collection
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check that all variables used in a rule have a name in this collection
    pub fn check_rule(&self, rule: &dyn Rule) -> Result<(), QmError> {
        match rule.get_support().iter().find(|v| v.uid() >= self.len()) {
            None => Ok(()),
            Some(v) => Err(QmError::NoSuchVariable(v)),
        }
    }
}

impl fmt::Display for NamedRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rule.fmt_rule(f, self.namer)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn naming() -> Result<(), QmError> {
        let mut space = VarSpace::default();
        let vtest = space.add("test")?;
        let valt = space.add("alternative")?;

        assert!(space.add("3test").is_err());
        assert!(space.add("te%t").is_err());
        assert_eq!(space.add("test"), Err(QmError::ConflictingName("test".into())));

        assert_eq!(vtest, space.get_or_err("test")?);
        assert_eq!(valt, space.get_or_err("alternative")?);
        assert!(space.get_or_err("pipo").is_err());

        space.set_name(valt, "other")?;
        assert_eq!(space.get("alternative"), None);
        assert_eq!(space.name(valt), "other");
        assert_eq!(space.name(Variable::from(4)), "E");

        Ok(())
    }

    #[test]
    fn split_juxtaposed_names() -> Result<(), QmError> {
        let space = VarSpace::alphabetic(4);
        let run = space.split_run("ABD").unwrap();
        assert_eq!(run.iter().map(|v| v.uid()).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(space.split_run("AXB"), None);

        let space = VarSpace::from_names(["x1", "x2", "x12"])?;
        let run = space.split_run("x12x1").unwrap();
        assert_eq!(run.iter().map(|v| v.uid()).collect::<Vec<_>>(), vec![2, 0]);
        Ok(())
    }

    #[test]
    fn check_rule() -> Result<(), QmError> {
        let space = VarSpace::alphabetic(2);
        let term: Term = "1*".parse()?;
        assert!(space.check_rule(&term).is_ok());

        let term: Term = "1*0".parse()?;
        assert_eq!(
            space.check_rule(&term),
            Err(QmError::NoSuchVariable(Variable::from(2)))
        );
        Ok(())
    }
}
