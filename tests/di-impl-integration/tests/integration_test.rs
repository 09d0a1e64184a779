//! di-impl 集中集成测试
use async_trait::async_trait;
use component_macros::Injectable;
use di_abstractions::{DependencyResolver, Injectable, ResolveOptions, Wired, DEFAULT_NAME};
use di_impl::{resolve_dependency, DefaultDependencyResolver, Registry, ResolveOptionsLoader};
use infrastructure_common::{Component, DependencyErrorKind, LifecycleError};
use support::Counter;
use std::io::Write;
use std::sync::Arc;

mod support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 生命周期计数器
    #[derive(Debug, Default)]
    pub struct Counter(AtomicUsize);

    impl Counter {
        pub fn bump(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        pub fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }
}

trait Storage: Send + Sync {
    fn location(&self) -> String;
}

/// 菱形依赖的公共底层
#[derive(Debug, Default, Injectable)]
#[injectable(provides(dyn Storage))]
struct Disk {
    started: Counter,
}

impl Storage for Disk {
    fn location(&self) -> String {
        "/var/data".to_string()
    }
}

#[async_trait]
impl Component for Disk {
    async fn start(&self) -> Result<(), LifecycleError> {
        self.started.bump();
        Ok(())
    }
}

#[derive(Debug, Default, Injectable)]
struct Index {
    #[boot("wire")]
    pub storage: Wired<dyn Storage>,
}

impl Component for Index {}

#[derive(Debug, Default, Injectable)]
struct Journal {
    #[boot("wire")]
    pub disk: Wired<Disk>,
}

impl Component for Journal {}

#[derive(Debug, Default, Injectable)]
struct Database {
    #[boot("wire")]
    pub index: Wired<Index>,
    #[boot("wire")]
    pub journal: Wired<Journal>,
    pub label: String,
}

#[async_trait]
impl Component for Database {
    async fn init(&self) -> Result<(), LifecycleError> {
        let index = self
            .index
            .get()
            .ok_or_else(|| LifecycleError::init_failed("Database", "index 未装配"))?;
        let storage = index
            .storage
            .get()
            .ok_or_else(|| LifecycleError::init_failed("Database", "storage 未装配"))?;
        if storage.location().is_empty() {
            return Err(LifecycleError::init_failed("Database", "存储位置为空"));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Injectable)]
struct Loner {
    #[boot("wire")]
    pub myself: Wired<Loner>,
}

impl Component for Loner {}

fn diamond() -> (Registry, Arc<Disk>, Arc<Database>) {
    let disk = Arc::new(Disk::default());
    let database = Arc::new(Database::default());

    let mut registry = Registry::new();
    registry.register(disk.clone());
    registry.register(Arc::new(Index::default()));
    registry.register(Arc::new(Journal::default()));
    registry.register(database.clone());

    (registry, disk, database)
}

fn same_instance<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}

#[test]
fn test_diamond_shares_single_instance() {
    let (registry, disk, database) = diamond();

    let entry = registry.entry_of::<Database>(DEFAULT_NAME).unwrap();
    resolve_dependency(entry, &registry).unwrap();

    let index = database.index.get().unwrap();
    let journal = database.journal.get().unwrap();
    assert!(same_instance(&index.storage.get().unwrap(), &disk));
    assert!(journal.disk.ptr_eq(&disk));
}

#[test]
fn test_self_reference_is_a_cycle() {
    let mut registry = Registry::new();
    registry.register(Arc::new(Loner::default()));

    let entry = registry.entry_of::<Loner>(DEFAULT_NAME).unwrap();
    let err = resolve_dependency(entry, &registry).unwrap_err();
    assert_eq!(err.kind(), DependencyErrorKind::CircularDependency);
    assert_eq!(
        err.to_string(),
        "Error circular dependency detected <default:Loner -> default:Loner>"
    );
}

#[test]
fn test_resolver_as_trait_object() {
    let (registry, _, database) = diamond();
    let resolver: Box<dyn DependencyResolver> = Box::new(DefaultDependencyResolver::default());

    let entry = registry.entry_of::<Database>(DEFAULT_NAME).unwrap();
    let wired = resolver.resolve(entry, &registry).unwrap();

    assert!(same_instance(&wired, &database));
    assert_eq!(wired.fields().len(), 3);
}

#[test]
fn test_resolve_all_counts_entries() {
    let (registry, _, database) = diamond();

    let count = DefaultDependencyResolver::default()
        .resolve_all(&registry)
        .unwrap();
    assert_eq!(count, 4);
    assert!(database.index.is_wired());
    assert!(database.journal.is_wired());
}

#[test]
fn test_depth_limit_from_options() {
    let (registry, _, _) = diamond();
    let resolver = DefaultDependencyResolver::new(ResolveOptions {
        max_depth: 2,
        detect_cycles: true,
    });

    let entry = registry.entry_of::<Database>(DEFAULT_NAME).unwrap();
    let err = resolver.resolve(entry, &registry).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error dependency resolution exceeded max depth 2 at <default:Disk>"
    );
}

#[test]
fn test_options_loaded_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[resolver]")?;
    writeln!(file, "max_depth = 2")?;

    let options = ResolveOptionsLoader::new()
        .with_file(file.path())
        .with_env_prefix("WIRING_INTEGRATION")
        .load()?;
    assert_eq!(options.max_depth, 2);

    let (registry, _, _) = diamond();
    let entry = registry.entry_of::<Database>(DEFAULT_NAME).unwrap();
    let err = DefaultDependencyResolver::new(options)
        .resolve(entry, &registry)
        .unwrap_err();
    assert_eq!(err.kind(), DependencyErrorKind::ResolutionTooDeep);
    Ok(())
}

#[test]
fn test_concurrent_resolution_over_shared_registry() {
    let (registry, disk, database) = diamond();
    let resolver = DefaultDependencyResolver::default();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let entry = registry.entry_of::<Database>(DEFAULT_NAME).unwrap();
                resolver.resolve(entry, &registry).unwrap();
            });
        }
    });

    let journal = database.journal.get().unwrap();
    assert!(journal.disk.ptr_eq(&disk));
}

#[tokio::test]
async fn test_lifecycle_after_wiring() -> anyhow::Result<()> {
    let (registry, disk, database) = diamond();

    let unwired = database.init().await;
    assert!(unwired.is_err());

    DefaultDependencyResolver::default().resolve_all(&registry)?;

    database.init().await?;
    disk.start().await?;
    disk.stop().await?;
    assert_eq!(disk.started.get(), 1);
    Ok(())
}
