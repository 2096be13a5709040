//! Host side of the emit extension point.

use tracing::{debug, info_span};

use crate::compilation::Compilation;
use crate::error::{EmitError, EmitResult};

/// A plugin tapped into the emit phase.
///
/// `emit` runs once per build pass after assets are finalised and before they are
/// written. Returning signals completion to the host; an error aborts the pass.
pub trait Plugin {
  /// Name the plugin is registered under.
  fn name(&self) -> &'static str;

  /// Inspect and extend the finalised assets of `compilation`.
  fn emit(&self, compilation: &mut Compilation) -> EmitResult<()>;
}

/// Registry of emit-phase plugins for one build.
#[derive(Default)]
pub struct Compiler {
  plugins: Vec<Box<dyn Plugin>>,
}

impl Compiler {
  /// Create a compiler with no plugins registered.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a plugin on the emit hook.
  pub fn apply(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
    debug!(plugin = plugin.name(), "registered emit plugin");
    self.plugins.push(Box::new(plugin));
    self
  }

  /// Names of the registered plugins in invocation order.
  pub fn plugins(&self) -> Vec<&'static str> {
    self.plugins.iter().map(|plugin| plugin.name()).collect()
  }

  /// Fire the emit hook, running every plugin once in registration order.
  pub fn emit(&self, compilation: &mut Compilation) -> EmitResult<()> {
    for plugin in &self.plugins {
      let _span = info_span!("emit", plugin = plugin.name()).entered();
      plugin
        .emit(compilation)
        .map_err(|source| EmitError::Plugin {
          plugin: plugin.name(),
          source: Box::new(source),
        })?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::io;
  use std::rc::Rc;

  use super::*;
  use crate::asset::RawSource;

  struct Recording {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
    fail: bool,
  }

  impl Plugin for Recording {
    fn name(&self) -> &'static str {
      self.name
    }

    fn emit(&self, compilation: &mut Compilation) -> EmitResult<()> {
      self.log.borrow_mut().push(self.name);
      if self.fail {
        return Err(EmitError::Content {
          name: "broken.js".into(),
          source: io::Error::other("boom"),
        });
      }
      compilation.emit_asset(format!("{}.txt", self.name), RawSource::from(self.name));
      Ok(())
    }
  }

  fn recording(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>, fail: bool) -> Recording {
    Recording {
      name,
      log: Rc::clone(log),
      fail,
    }
  }

  #[test]
  fn runs_plugins_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut compiler = Compiler::new();
    compiler
      .apply(recording("first", &log, false))
      .apply(recording("second", &log, false));

    let mut compilation = Compilation::new();
    compiler.emit(&mut compilation).unwrap();

    assert_eq!(compiler.plugins(), vec!["first", "second"]);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
    assert_eq!(
      compilation.asset_names().collect::<Vec<_>>(),
      vec!["first.txt", "second.txt"]
    );
  }

  #[test]
  fn stops_at_first_failing_plugin() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut compiler = Compiler::new();
    compiler
      .apply(recording("broken", &log, true))
      .apply(recording("after", &log, false));

    let mut compilation = Compilation::new();
    let err = compiler.emit(&mut compilation).unwrap_err();

    assert!(matches!(err, EmitError::Plugin { plugin: "broken", .. }));
    assert_eq!(*log.borrow(), vec!["broken"]);
    assert_eq!(compilation.assets().len(), 0);
  }
}
