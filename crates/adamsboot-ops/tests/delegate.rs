use std::fs;
use std::path::PathBuf;

use adamsboot_core::coordinate::MavenCoordinate;
use adamsboot_core::resolver::resolve;
use adamsboot_ops::delegate::{
    collect_coordinates, copy_external, maven_command, render_pom, write_launch_scripts,
    BuildDelegate, BuildPlan, MavenDelegate, OutputLayout, DEFAULT_POM_TEMPLATE,
};
use tempfile::TempDir;

fn plan(output_dir: PathBuf) -> BuildPlan {
    BuildPlan {
        name: "adams".to_string(),
        dependencies: resolve("adams-core", "20.1.1", &["org.example:lib:2.0".to_string()])
            .unwrap(),
        dependency_files: Vec::new(),
        output_dir,
        pom_template: DEFAULT_POM_TEMPLATE.to_string(),
        settings: PathBuf::from("/home/user/settings.xml"),
        maven_home: None,
        java_home: None,
        clean: false,
        sources: false,
        jvm: Vec::new(),
        main_class: Some("adams.gui.Main".to_string()),
        external_jars: Vec::new(),
        external_sources: Vec::new(),
    }
}

#[test]
fn dependency_files_are_merged_after_the_set() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("deps.txt");
    fs::write(&file, "# more\ncom.example:extra:0.1\n").unwrap();

    let p = plan(tmp.path().join("app"));
    let coords = collect_coordinates(&p.dependencies, &[file]).unwrap();
    assert_eq!(
        coords,
        vec![
            MavenCoordinate::new("nz.ac.waikato.cms.adams", "adams-core", "20.1.1"),
            MavenCoordinate::new("org.example", "lib", "2.0"),
            MavenCoordinate::new("com.example", "extra", "0.1"),
        ]
    );
}

#[test]
fn malformed_extra_dependency_is_rejected() {
    let deps = resolve("adams-core", "20.1.1", &["just-a-name".to_string()]).unwrap();
    let err = collect_coordinates(&deps, &[]).unwrap_err();
    assert!(
        err.to_string().contains("Invalid dependency coordinate 'just-a-name'"),
        "got: {err}"
    );
}

#[test]
fn rendered_pom_lists_dependencies_and_directories() {
    let tmp = TempDir::new().unwrap();
    let p = plan(tmp.path().join("app"));
    let layout = OutputLayout::new(&p.output_dir);
    let coords = collect_coordinates(&p.dependencies, &[]).unwrap();

    let pom = render_pom(&p, &coords, &layout);
    assert!(pom.contains("<artifactId>adams</artifactId>"));
    assert!(pom.contains("<groupId>nz.ac.waikato.cms.adams</groupId>"));
    assert!(pom.contains("<artifactId>adams-core</artifactId>"));
    assert!(pom.contains("<version>20.1.1</version>"));
    assert!(pom.contains("<artifactId>lib</artifactId>"));
    assert!(pom.contains(&format!(
        "<outputDirectory>{}</outputDirectory>",
        layout.lib_dir.display()
    )));
    assert!(pom.contains("<skip>true</skip>"));
    assert!(!pom.contains("{{"));
    // adams-core comes before the extra dependency
    assert!(pom.find("adams-core").unwrap() < pom.find("<artifactId>lib<").unwrap());
}

#[test]
fn sources_enable_the_sources_execution() {
    let tmp = TempDir::new().unwrap();
    let p = BuildPlan {
        sources: true,
        ..plan(tmp.path().join("app"))
    };
    let layout = OutputLayout::new(&p.output_dir);
    let pom = render_pom(&p, &[], &layout);
    assert!(pom.contains("<skip>false</skip>"));
}

#[test]
fn maven_command_arguments() {
    let tmp = TempDir::new().unwrap();
    let p = BuildPlan {
        clean: true,
        maven_home: Some(PathBuf::from("/opt/maven")),
        ..plan(tmp.path().join("app"))
    };
    let layout = OutputLayout::new(&p.output_dir);
    let cmd = maven_command(&p, &layout);

    assert!(cmd.program().starts_with("/opt/maven"));
    let args = cmd.args();
    assert_eq!(args[0], "-B");
    assert_eq!(args[1], "-s");
    assert_eq!(args[2], "/home/user/settings.xml");
    assert_eq!(args[3], "-f");
    assert_eq!(PathBuf::from(&args[4]), layout.pom_path());
    assert_eq!(&args[5..], &["clean".to_string(), "package".to_string()]);
}

#[test]
fn maven_command_without_clean() {
    let tmp = TempDir::new().unwrap();
    let p = plan(tmp.path().join("app"));
    let cmd = maven_command(&p, &OutputLayout::new(&p.output_dir));
    assert_eq!(cmd.args().last().map(String::as_str), Some("package"));
    assert!(!cmd.args().iter().any(|a| a == "clean"));
    assert_eq!(cmd.env_value("JAVA_HOME"), None);
}

#[test]
fn maven_command_sets_java_home() {
    let tmp = TempDir::new().unwrap();
    let p = BuildPlan {
        java_home: Some(PathBuf::from("/usr/lib/jvm/java-11")),
        ..plan(tmp.path().join("app"))
    };
    let cmd = maven_command(&p, &OutputLayout::new(&p.output_dir));
    assert_eq!(cmd.env_value("JAVA_HOME"), Some("/usr/lib/jvm/java-11"));
}

#[test]
fn launch_scripts_pass_jvm_options() {
    let tmp = TempDir::new().unwrap();
    let layout = OutputLayout::new(tmp.path());
    let scripts = write_launch_scripts(
        &layout,
        "adams",
        "adams.gui.Main",
        &["-Xmx2g".to_string(), "-Dfoo=bar baz".to_string()],
    )
    .unwrap();

    assert_eq!(scripts.len(), 2);
    let sh = fs::read_to_string(tmp.path().join("bin/adams.sh")).unwrap();
    assert!(sh.starts_with("#!/bin/sh"));
    assert!(sh.contains("'-Xmx2g' '-Dfoo=bar baz' -cp \"$BASEDIR/lib/*\" 'adams.gui.Main'"));

    let bat = fs::read_to_string(tmp.path().join("bin/adams.bat")).unwrap();
    assert!(bat.contains("\"-Xmx2g\" \"-Dfoo=bar baz\""));
    assert!(bat.contains("\r\n"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(tmp.path().join("bin/adams.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

#[test]
fn external_jars_from_files_and_directories() {
    let src = TempDir::new().unwrap();
    let single = src.path().join("single.jar");
    fs::write(&single, "x").unwrap();
    let dir = src.path().join("more");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.jar"), "a").unwrap();
    fs::write(dir.join("notes.txt"), "n").unwrap();

    let out = TempDir::new().unwrap();
    let lib = out.path().join("lib");
    let copied = copy_external(&[single, dir], &lib).unwrap();

    assert_eq!(copied, 2);
    assert!(lib.join("single.jar").is_file());
    assert!(lib.join("a.jar").is_file());
    assert!(!lib.join("notes.txt").exists());
}

#[test]
fn no_external_jars_creates_nothing() {
    let out = TempDir::new().unwrap();
    assert_eq!(copy_external(&[], &out.path().join("lib")).unwrap(), 0);
    assert!(!out.path().join("lib").exists());
}

#[test]
fn missing_maven_fails_after_writing_pom() {
    let tmp = TempDir::new().unwrap();
    let app = tmp.path().join("app");
    fs::create_dir_all(app.join("lib")).unwrap();
    fs::write(app.join("lib/stale.jar"), "old").unwrap();

    let p = BuildPlan {
        clean: true,
        maven_home: Some(tmp.path().join("no-maven-here")),
        ..plan(app.clone())
    };

    let err = MavenDelegate.execute(&p).unwrap_err();
    assert!(err.to_string().contains("Failed to run Maven"), "got: {err}");
    assert!(app.join(".maven/pom.xml").is_file());
    assert!(!app.join("lib/stale.jar").exists());
    assert!(!app.join("bin").exists());
}

/// Writes `<dir>/maven/bin/mvn` running `script` and returns the Maven home.
#[cfg(unix)]
fn fake_maven(dir: &std::path::Path, script: &str) -> PathBuf {
    let home = dir.join("maven");
    fs::create_dir_all(home.join("bin")).unwrap();
    let mvn = home.join("bin/mvn");
    fs::write(&mvn, format!("#!/bin/sh\n{script}")).unwrap();
    adamsboot_util::fs::make_executable(&mvn).unwrap();
    home
}

// Checks the settings ($3) and POM ($5) from Maven's working directory, then
// drops a jar into the first <outputDirectory>, which must be absolute.
#[cfg(unix)]
const COPYING_MAVEN: &str = r#"
[ -f "$3" ] || { echo "[ERROR] settings not found: $3"; exit 1; }
[ -f "$5" ] || { echo "[ERROR] pom not found: $5"; exit 1; }
lib=$(sed -n 's:.*<outputDirectory>\(.*\)</outputDirectory>.*:\1:p' "$5" | head -n 1)
case "$lib" in
  /*) ;;
  *) echo "[ERROR] relative output directory: $lib"; exit 1 ;;
esac
mkdir -p "$lib" && : > "$lib/adams-core-20.1.1.jar"
"#;

#[cfg(unix)]
#[test]
fn successful_build_assembles_application() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.xml");
    fs::write(&settings, "<settings/>").unwrap();
    let extra = tmp.path().join("extra.jar");
    fs::write(&extra, "jar").unwrap();
    let extra_src = tmp.path().join("extra-sources.jar");
    fs::write(&extra_src, "src").unwrap();
    let app = tmp.path().join("app");

    let p = BuildPlan {
        name: "weka-app".to_string(),
        settings,
        maven_home: Some(fake_maven(tmp.path(), COPYING_MAVEN)),
        jvm: vec!["-Xmx2g".to_string()],
        external_jars: vec![extra],
        external_sources: vec![extra_src],
        ..plan(app.clone())
    };

    MavenDelegate.execute(&p).unwrap();

    assert!(app.join("lib/adams-core-20.1.1.jar").is_file());
    assert!(app.join("lib/extra.jar").is_file());
    assert!(app.join("src/extra-sources.jar").is_file());
    let sh = fs::read_to_string(app.join("bin/weka-app.sh")).unwrap();
    assert!(sh.contains("'-Xmx2g'"));
    assert!(sh.contains("adams.gui.Main"));
    assert!(app.join("bin/weka-app.bat").is_file());
}

#[cfg(unix)]
#[test]
fn relative_paths_resolve_against_current_dir() {
    // relative to the test's working directory, not to <output>/.maven
    let scratch = tempfile::Builder::new()
        .prefix("relative-build")
        .tempdir_in(".")
        .unwrap();
    let base = PathBuf::from(scratch.path().file_name().unwrap());
    assert!(base.is_relative());

    fs::write(base.join("settings.xml"), "<settings/>").unwrap();
    fake_maven(&base, COPYING_MAVEN);

    let p = BuildPlan {
        settings: base.join("settings.xml"),
        maven_home: Some(base.join("maven")),
        ..plan(base.join("app"))
    };

    MavenDelegate.execute(&p).unwrap();

    assert!(base.join("app/.maven/pom.xml").is_file());
    assert!(base.join("app/lib/adams-core-20.1.1.jar").is_file());
    assert!(!base.join("app/.maven/app").exists());
    assert!(base.join("app/bin/adams.sh").is_file());
}

#[test]
fn absolutized_plan_has_no_relative_paths() {
    let p = BuildPlan {
        maven_home: Some(PathBuf::from("tools/maven")),
        dependency_files: vec![PathBuf::from("deps.txt")],
        external_jars: vec![PathBuf::from("jars")],
        ..plan(PathBuf::from("app"))
    }
    .absolutized()
    .unwrap();

    let cwd = std::env::current_dir().unwrap();
    assert_eq!(p.output_dir, cwd.join("app"));
    assert_eq!(p.maven_home, Some(cwd.join("tools/maven")));
    assert_eq!(p.dependency_files, vec![cwd.join("deps.txt")]);
    assert_eq!(p.external_jars, vec![cwd.join("jars")]);
    assert_eq!(p.settings, PathBuf::from("/home/user/settings.xml"));
    assert_eq!(p.java_home, None);
}

#[cfg(unix)]
#[test]
fn failed_build_reports_tail_of_maven_output() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.xml");
    fs::write(&settings, "<settings/>").unwrap();
    let failing = r#"
i=1
while [ $i -le 40 ]; do echo "[INFO] step $i"; i=$((i+1)); done
echo "[ERROR] Could not resolve dependencies for adams-core"
exit 1
"#;
    let app = tmp.path().join("app");
    let p = BuildPlan {
        settings,
        maven_home: Some(fake_maven(tmp.path(), failing)),
        ..plan(app.clone())
    };

    let err = MavenDelegate.execute(&p).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Maven exited with code 1"), "got: {msg}");
    assert!(msg.contains("Could not resolve dependencies"), "got: {msg}");
    assert!(msg.contains("[INFO] step 40"));
    assert!(!msg.contains("[INFO] step 5\n"));
    assert!(!app.join("bin").exists());
}
