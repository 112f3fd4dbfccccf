//! The build delegate: turns a resolved dependency set into an application
//! directory (`lib/`, optional `src/`, `bin/` launch scripts).
//!
//! [`MavenDelegate`] renders the POM template into `<output>/.maven/pom.xml`
//! and lets the installed Maven copy the resolved artifacts.

use std::path::{Path, PathBuf};

use adamsboot_core::coordinate::MavenCoordinate;
use adamsboot_core::dependency_file;
use adamsboot_core::resolver::DependencySet;
use adamsboot_core::template::{interpolate, xml_escape, TemplateContext};
use adamsboot_util::errors::{BootstrapError, BootstrapResult};
use adamsboot_util::process::ToolCommand;
use adamsboot_util::progress::{spinner, status, status_info};

/// POM template used when none is supplied.
pub const DEFAULT_POM_TEMPLATE: &str = include_str!("../templates/pom.xml");

const LAUNCH_SH: &str = include_str!("../templates/launch.sh");
const LAUNCH_BAT: &str = include_str!("../templates/launch.bat");

/// Lines of Maven output kept in a build error.
const OUTPUT_TAIL_LINES: usize = 30;

/// Everything the delegate needs to assemble the application.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub name: String,
    pub dependencies: DependencySet,
    /// Files with one extra coordinate per line, merged after `dependencies`.
    pub dependency_files: Vec<PathBuf>,
    pub output_dir: PathBuf,
    /// POM template content with `{{variable}}` placeholders.
    pub pom_template: String,
    pub settings: PathBuf,
    pub maven_home: Option<PathBuf>,
    pub java_home: Option<PathBuf>,
    pub clean: bool,
    pub sources: bool,
    pub jvm: Vec<String>,
    /// Launch scripts are only written when this is set.
    pub main_class: Option<String>,
    pub external_jars: Vec<PathBuf>,
    pub external_sources: Vec<PathBuf>,
}

impl BuildPlan {
    /// The same plan with every path made absolute.
    ///
    /// Maven runs inside `<output>/.maven` and resolves the POM's output
    /// directories against it, so nothing handed to it may stay relative.
    pub fn absolutized(&self) -> BootstrapResult<Self> {
        let abs = |p: &Path| adamsboot_util::fs::absolute(p).map_err(BootstrapError::Io);
        let abs_all = |paths: &[PathBuf]| {
            paths
                .iter()
                .map(|p| abs(p.as_path()))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            dependency_files: abs_all(&self.dependency_files)?,
            output_dir: abs(&self.output_dir)?,
            settings: abs(&self.settings)?,
            maven_home: self.maven_home.as_deref().map(abs).transpose()?,
            java_home: self.java_home.as_deref().map(abs).transpose()?,
            external_jars: abs_all(&self.external_jars)?,
            external_sources: abs_all(&self.external_sources)?,
            ..self.clone()
        })
    }
}

/// Assembles the application described by a [`BuildPlan`].
pub trait BuildDelegate {
    fn execute(&self, plan: &BuildPlan) -> BootstrapResult<()>;
}

/// Directory layout of a bootstrapped application.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub maven_dir: PathBuf,
    pub lib_dir: PathBuf,
    pub sources_dir: PathBuf,
    pub bin_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            maven_dir: root.join(".maven"),
            lib_dir: root.join("lib"),
            sources_dir: root.join("src"),
            bin_dir: root.join("bin"),
        }
    }

    pub fn pom_path(&self) -> PathBuf {
        self.maven_dir.join("pom.xml")
    }
}

/// Merge the plan's dependency files into its dependency set and parse
/// every entry as `group:artifact:version`.
pub fn collect_coordinates(
    dependencies: &DependencySet,
    dependency_files: &[PathBuf],
) -> miette::Result<Vec<MavenCoordinate>> {
    let from_files = dependency_file::read_dependency_files(dependency_files)?;

    dependencies
        .iter()
        .chain(from_files.iter().map(String::as_str))
        .map(|dep| {
            MavenCoordinate::parse(dep).ok_or_else(|| {
                miette::Report::from(BootstrapError::configuration(format!(
                    "Invalid dependency coordinate '{dep}', expected group:artifact:version"
                )))
            })
        })
        .collect()
}

/// Render the `<dependency>` blocks for the POM.
pub fn dependencies_xml(coordinates: &[MavenCoordinate]) -> String {
    coordinates
        .iter()
        .map(|c| {
            format!(
                "    <dependency>\n      <groupId>{}</groupId>\n      <artifactId>{}</artifactId>\n      <version>{}</version>\n    </dependency>",
                xml_escape(&c.group_id),
                xml_escape(&c.artifact_id),
                xml_escape(&c.version)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill the POM template for this plan.
pub fn render_pom(
    plan: &BuildPlan,
    coordinates: &[MavenCoordinate],
    layout: &OutputLayout,
) -> String {
    let ctx = TemplateContext::new()
        .with("name", xml_escape(&plan.name))
        .with("dependencies", dependencies_xml(coordinates))
        .with("lib_dir", xml_escape(&layout.lib_dir.to_string_lossy()))
        .with("sources_dir", xml_escape(&layout.sources_dir.to_string_lossy()))
        .with("skip_sources", (!plan.sources).to_string());
    interpolate(&plan.pom_template, &ctx)
}

/// Path of the `mvn` launcher: inside `maven_home` if given, else from `PATH`.
pub fn maven_executable(maven_home: Option<&Path>) -> String {
    let exe = if cfg!(windows) { "mvn.cmd" } else { "mvn" };
    match maven_home {
        Some(home) => home.join("bin").join(exe).to_string_lossy().to_string(),
        None => exe.to_string(),
    }
}

/// The Maven invocation for this plan.
pub fn maven_command(plan: &BuildPlan, layout: &OutputLayout) -> ToolCommand {
    let cmd = ToolCommand::new(maven_executable(plan.maven_home.as_deref()))
        .arg("-B")
        .arg("-s")
        .path_arg(&plan.settings)
        .arg("-f")
        .path_arg(layout.pom_path())
        .arg_if(plan.clean, "clean")
        .arg("package")
        .current_dir(&layout.maven_dir);
    match plan.java_home {
        Some(ref java_home) => cmd.path_env("JAVA_HOME", java_home),
        None => cmd,
    }
}

fn run_maven(cmd: &ToolCommand) -> miette::Result<()> {
    let output = cmd.run().map_err(|e| BootstrapError::Build {
        message: format!(
            "Failed to run Maven ({}): {e}. Install Maven or pass --maven-home",
            cmd.program()
        ),
    })?;

    if !output.success() {
        return Err(BootstrapError::Build {
            message: format!(
                "Maven exited with code {}\n{}",
                output.code.unwrap_or(1),
                output.tail(OUTPUT_TAIL_LINES)
            ),
        }
        .into());
    }
    Ok(())
}

/// Copy jars (or every jar in a directory) into `dir`. Returns the count.
pub fn copy_external(paths: &[PathBuf], dir: &Path) -> miette::Result<usize> {
    if paths.is_empty() {
        return Ok(0);
    }
    adamsboot_util::fs::ensure_dir(dir).map_err(BootstrapError::Io)?;

    let mut copied = 0;
    for path in paths {
        for jar in adamsboot_util::fs::collect_jars(path).map_err(BootstrapError::Io)? {
            adamsboot_util::fs::copy_into(&jar, dir).map_err(|e| BootstrapError::Generic {
                message: format!("Failed to copy {} to {}: {e}", jar.display(), dir.display()),
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn bat_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Write `bin/<name>.sh` and `bin/<name>.bat`. Returns their paths.
pub fn write_launch_scripts(
    layout: &OutputLayout,
    name: &str,
    main_class: &str,
    jvm: &[String],
) -> miette::Result<Vec<PathBuf>> {
    adamsboot_util::fs::ensure_dir(&layout.bin_dir).map_err(BootstrapError::Io)?;

    let sh = interpolate(
        LAUNCH_SH,
        &TemplateContext::new()
            .with("name", name)
            .with("main_class", sh_quote(main_class))
            .with(
                "jvm",
                jvm.iter().map(|o| sh_quote(o)).collect::<Vec<_>>().join(" "),
            ),
    );
    let bat = interpolate(
        LAUNCH_BAT,
        &TemplateContext::new()
            .with("name", name)
            .with("main_class", main_class)
            .with(
                "jvm",
                jvm.iter().map(|o| bat_quote(o)).collect::<Vec<_>>().join(" "),
            ),
    )
    .replace('\n', "\r\n");

    let sh_path = layout.bin_dir.join(format!("{name}.sh"));
    let bat_path = layout.bin_dir.join(format!("{name}.bat"));
    std::fs::write(&sh_path, sh).map_err(BootstrapError::Io)?;
    adamsboot_util::fs::make_executable(&sh_path).map_err(BootstrapError::Io)?;
    std::fs::write(&bat_path, bat).map_err(BootstrapError::Io)?;

    Ok(vec![sh_path, bat_path])
}

/// Build delegate backed by an installed Maven.
#[derive(Debug, Default, Clone)]
pub struct MavenDelegate;

impl MavenDelegate {
    /// Wipe previous output and write the POM. Returns the parsed coordinates.
    fn prepare(
        &self,
        plan: &BuildPlan,
        layout: &OutputLayout,
    ) -> miette::Result<Vec<MavenCoordinate>> {
        let coordinates = collect_coordinates(&plan.dependencies, &plan.dependency_files)?;

        if plan.clean {
            for dir in [&layout.lib_dir, &layout.sources_dir, &layout.bin_dir] {
                adamsboot_util::fs::remove_dir_if_exists(dir).map_err(BootstrapError::Io)?;
            }
        }
        adamsboot_util::fs::ensure_dir(&layout.maven_dir).map_err(BootstrapError::Io)?;

        let pom = render_pom(plan, &coordinates, layout);
        std::fs::write(layout.pom_path(), pom).map_err(BootstrapError::Io)?;
        tracing::info!("wrote {}", layout.pom_path().display());

        Ok(coordinates)
    }
}

impl BuildDelegate for MavenDelegate {
    fn execute(&self, plan: &BuildPlan) -> BootstrapResult<()> {
        let plan = &plan.absolutized()?;
        let layout = OutputLayout::new(&plan.output_dir);
        let coordinates = self.prepare(plan, &layout)?;

        let cmd = maven_command(plan, &layout);
        status(
            "Building",
            &format!("{} ({} dependencies)", plan.name, coordinates.len()),
        );
        let sp = spinner("Running Maven...");
        let result = run_maven(&cmd);
        sp.finish_and_clear();
        result?;

        let jars = copy_external(&plan.external_jars, &layout.lib_dir)?;
        let sources = copy_external(&plan.external_sources, &layout.sources_dir)?;
        if jars + sources > 0 {
            status(
                "Copied",
                &format!("{jars} external jar(s), {sources} external source jar(s)"),
            );
        }

        if let Some(main_class) = plan.main_class.as_deref() {
            let scripts = write_launch_scripts(&layout, &plan.name, main_class, &plan.jvm)?;
            for script in &scripts {
                tracing::debug!("wrote {}", script.display());
            }
        } else {
            status_info("Skipped", "launch scripts (no main class)");
        }

        status("Finished", &layout.root.display().to_string());
        Ok(())
    }
}
