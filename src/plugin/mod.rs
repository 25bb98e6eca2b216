//! Plugin façade driven by the host build tool.
//!
//! # Lifecycle
//!
//! ```text
//! new(config)            validate config, empty symbol cache
//!     │
//! config_resolved(cmd)   dev or build mode
//!     │
//! build_start()          re-arm the once-per-build pass
//!     │
//! resolve_id(id)         claim `virtual:svg-icons*` ids
//!     │
//! load(id, host)         dev:   first icon dir whose key matches → module source
//!                        build: reset out_dir, emit every sprite, no source
//! ```

mod virtual_id;

pub use virtual_id::{REGISTER_PREFIX, VIRTUAL_MODULE_MARKER, is_virtual, register_id, targets};

use anyhow::{Context, Result};
use parking_lot::Mutex;

use crate::compiler::{CompileError, CompiledSet, IconSettings, SymbolCache, compile_directory};
use crate::config::{ConfigError, IconDir, SvgIconsConfig};
use crate::core::{HostCommand, Mode};
use crate::output::{
    AssetSink, CompiledOutput, DirectorySink, DomOptions, assemble, reset_out_dir,
};
use crate::svg::OptimizeOptions;
use crate::symbol::SymbolIdTemplate;
use crate::{debug, log};

/// Mutable per-build state.
#[derive(Debug)]
struct PluginState {
    mode: Mode,
    /// Build passes left before the next `build_start`.
    builds_pending: usize,
}

/// The plugin instance: validated options plus the symbol cache it owns.
#[derive(Debug)]
pub struct SvgIconsPlugin {
    config: SvgIconsConfig,
    template: SymbolIdTemplate,
    optimizer: Option<OptimizeOptions>,
    cache: SymbolCache,
    state: Mutex<PluginState>,
}

impl SvgIconsPlugin {
    /// Validate `config` and create the plugin.
    ///
    /// Invalid configuration (e.g. a symbol id template without `[name]`)
    /// fails here, before any icon is compiled.
    pub fn new(config: SvgIconsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let template = config.symbol_template()?;
        let optimizer = config.svgo.resolve();
        let mode = Mode::resolve(config.is_build, HostCommand::Serve);

        Ok(Self {
            config,
            template,
            optimizer,
            cache: SymbolCache::new(),
            state: Mutex::new(PluginState {
                mode,
                builds_pending: 1,
            }),
        })
    }

    pub fn config(&self) -> &SvgIconsConfig {
        &self.config
    }

    pub fn cache(&self) -> &SymbolCache {
        &self.cache
    }

    pub fn mode(&self) -> Mode {
        self.state.lock().mode
    }

    // ========================================================================
    // host hooks
    // ========================================================================

    /// Host configuration is final: decide dev vs build mode.
    pub fn config_resolved(&self, command: HostCommand) {
        let mode = Mode::resolve(self.config.is_build, command);
        debug!("plugin"; "mode: {:?}", mode);
        self.state.lock().mode = mode;
    }

    /// A new build starts: allow one more build pass.
    pub fn build_start(&self) {
        self.state.lock().builds_pending = 1;
    }

    /// Claim virtual module ids, leave everything else to the host.
    pub fn resolve_id<'a>(&self, id: &'a str) -> Option<&'a str> {
        is_virtual(id).then_some(id)
    }

    /// Load a virtual module.
    ///
    /// Dev mode returns the injection module of the icon directory `id`
    /// targets. Build mode emits every sprite through `host` (or into
    /// `out_dir`) on the first load of a build and returns `None`.
    pub fn load(&self, id: &str, host: &mut dyn AssetSink) -> Result<Option<String>> {
        if !is_virtual(id) {
            return Ok(None);
        }

        match self.mode() {
            Mode::Dev => self.load_dev(id),
            Mode::Build => self.load_build(host).map(|()| None),
        }
    }

    // ========================================================================
    // pipeline
    // ========================================================================

    /// Compile one icon directory through the shared cache.
    pub fn compile_set(&self, icon_dir: &IconDir) -> Result<CompiledSet, CompileError> {
        let settings = IconSettings {
            dir_key: &icon_dir.key,
            optimizer: self.optimizer.as_ref(),
            replace_stroke: self.config.replace_stroke_with_current_color,
        };
        compile_directory(icon_dir, &self.cache, &self.template, &settings)
    }

    /// Compile and assemble one icon directory for `mode`.
    pub fn compile_output(&self, icon_dir: &IconDir, mode: Mode) -> Result<CompiledOutput> {
        let set = self
            .compile_set(icon_dir)
            .with_context(|| format!("failed to compile icons of `{}`", icon_dir.key))?;
        Ok(assemble(&set.markup, mode, &self.dom_options(), &icon_dir.key))
    }

    fn dom_options(&self) -> DomOptions<'_> {
        DomOptions {
            inject: self.config.inject,
            custom_dom_id: &self.config.custom_dom_id,
        }
    }

    /// Dev: recompile directories in order, answer with the first match.
    fn load_dev(&self, id: &str) -> Result<Option<String>> {
        for icon_dir in &self.config.icon_dirs {
            let output = self.compile_output(icon_dir, Mode::Dev)?;
            if targets(id, &output.target_key) {
                debug!("load"; "{} -> {}", id, output.target_key);
                return Ok(Some(output.code));
            }
        }
        Ok(None)
    }

    /// Build: once per build, reset `out_dir` then emit every directory.
    fn load_build(&self, host: &mut dyn AssetSink) -> Result<()> {
        {
            let mut state = self.state.lock();
            if state.builds_pending == 0 {
                return Ok(());
            }
            state.builds_pending -= 1;
        }

        let mut dir_sink = self.config.out_dir.clone().map(DirectorySink::new);
        if let Some(sink) = &dir_sink {
            reset_out_dir(sink.dir());
        }

        let sink: &mut dyn AssetSink = match dir_sink.as_mut() {
            Some(sink) => sink as &mut dyn AssetSink,
            None => host,
        };

        for icon_dir in &self.config.icon_dirs {
            let set = self
                .compile_set(icon_dir)
                .with_context(|| format!("failed to compile icons of `{}`", icon_dir.key))?;
            let output = assemble(&set.markup, Mode::Build, &self.dom_options(), &icon_dir.key);

            let file_name = format!("{}.svg", output.target_key);
            sink.emit(&file_name, &output.code)?;
            log!("build"; "{}: {} symbols", file_name, set.symbols.len());
        }

        Ok(())
    }
}
