//! Built-in rule data, in catalog order.

use super::rule::TypeFeatureRule as R;
use crate::catalog::Feature as F;

pub(crate) const BUILTIN_RULES: &[R] = &[
    // 1.0 / 1.1
    R::package("java.awt", F::Awt),
    R::package("java.applet", F::Applet),
    R::package("java.io", F::IoApi),
    R::package("java.sql", F::Jdbc),
    R::package("javax.sql", F::Jdbc),
    R::package("java.rmi", F::Rmi),
    R::package("java.beans", F::JavaBeans),
    R::types(
        "java.io",
        &["Serializable", "ObjectInputStream", "ObjectOutputStream", "Externalizable"],
        F::Serialization,
    ),
    // 1.2
    R::package("javax.swing", F::Swing),
    R::types(
        "java.util",
        &[
            "Collection", "List", "Set", "Map", "ArrayList", "LinkedList", "HashSet", "TreeSet",
            "HashMap", "TreeMap", "LinkedHashMap", "LinkedHashSet", "Iterator", "Collections",
            "Vector", "Hashtable", "Stack", "Queue", "Deque", "SortedSet", "SortedMap",
            "NavigableSet", "NavigableMap", "AbstractList", "AbstractSet", "AbstractMap",
            "AbstractCollection",
        ],
        F::CollectionsFramework,
    ),
    R::package("org.omg.CORBA", F::Corba),
    R::package("org.omg.CosNaming", F::Corba),
    // 1.3
    R::package("javax.naming", F::Jndi),
    R::package("javax.sound", F::JavaSound),
    R::package("com.sun.jdi", F::Jpda),
    // 1.4
    R::package("java.util.regex", F::Regex),
    R::types("java.util.regex", &["Pattern", "Matcher", "PatternSyntaxException"], F::Regex),
    R::package("java.nio", F::Nio),
    R::package("java.util.logging", F::Logging),
    R::package("javax.xml", F::XmlApi),
    R::package("java.util.prefs", F::Preferences),
    R::package("javax.imageio", F::ImageIo),
    // 5
    R::package("java.util.concurrent", F::ConcurrentApi),
    R::types(
        "java.util.concurrent",
        &[
            "ExecutorService", "Executor", "Executors", "Future", "Callable",
            "ThreadPoolExecutor", "ScheduledExecutorService", "ScheduledFuture", "TimeUnit",
            "CountDownLatch", "CyclicBarrier", "Semaphore", "BlockingQueue",
            "LinkedBlockingQueue", "ArrayBlockingQueue", "ConcurrentHashMap",
            "ConcurrentLinkedQueue", "ConcurrentMap", "CopyOnWriteArrayList",
            "CopyOnWriteArraySet", "Exchanger", "CompletionService",
            "ExecutorCompletionService", "CompletableFuture", "Phaser",
        ],
        F::ConcurrentApi,
    ),
    R::types(
        "java.util.concurrent.atomic",
        &[
            "AtomicInteger", "AtomicLong", "AtomicBoolean", "AtomicReference",
            "AtomicIntegerArray", "AtomicLongArray", "AtomicReferenceArray",
        ],
        F::ConcurrentApi,
    ),
    R::types(
        "java.util.concurrent.locks",
        &[
            "Lock", "ReentrantLock", "ReadWriteLock", "ReentrantReadWriteLock", "Condition",
            "StampedLock", "LockSupport",
        ],
        F::ConcurrentApi,
    ),
    R::types("java.util", &["Scanner"], F::Scanner),
    // 6
    R::package("javax.script", F::ScriptingApi),
    R::package("javax.tools", F::CompilerApi),
    R::package("javax.xml.bind", F::Jaxb),
    R::package("javax.xml.ws", F::JaxWs),
    R::package("javax.xml.stream", F::Stax),
    R::types("javax.swing", &["SwingWorker"], F::SwingWorker),
    // 7
    R::types(
        "java.util.concurrent",
        &[
            "ForkJoinPool", "ForkJoinTask", "ForkJoinWorkerThread", "RecursiveAction",
            "RecursiveTask", "CountedCompleter",
        ],
        F::ForkJoin,
    ),
    R::package("java.nio.file", F::Nio2),
    R::types(
        "java.nio.file",
        &[
            "Path", "Paths", "Files", "FileSystem", "FileSystems", "FileVisitor",
            "SimpleFileVisitor", "FileVisitResult", "StandardOpenOption", "StandardCopyOption",
            "LinkOption", "DirectoryStream",
        ],
        F::Nio2,
    ),
    R::types(
        "java.nio.file",
        &["WatchService", "WatchKey", "WatchEvent", "Watchable", "StandardWatchEventKinds"],
        F::WatchService,
    ),
    // 8
    R::package("java.util.stream", F::StreamApi),
    R::types(
        "java.util.stream",
        &[
            "Stream", "IntStream", "LongStream", "DoubleStream", "Collectors", "StreamSupport",
            "Collector", "BaseStream",
        ],
        F::StreamApi,
    ),
    R::package("java.time", F::DateTimeApi),
    R::types(
        "java.time",
        &[
            "LocalDate", "LocalTime", "LocalDateTime", "Instant", "ZonedDateTime", "Duration",
            "Period", "ZoneId", "ZoneOffset", "OffsetDateTime", "OffsetTime", "Year",
            "YearMonth", "MonthDay", "DayOfWeek", "Month", "Clock",
        ],
        F::DateTimeApi,
    ),
    R::types("java.time.format", &["DateTimeFormatter"], F::DateTimeApi),
    R::types("java.time.temporal", &["ChronoUnit", "ChronoField"], F::DateTimeApi),
    R::types(
        "java.util",
        &["Optional", "OptionalInt", "OptionalLong", "OptionalDouble"],
        F::Optional,
    ),
    R::types("java.util", &["Base64"], F::Base64Api),
    // 9
    R::types("java.lang", &["ProcessHandle"], F::ProcessApi),
    R::types("java.util.concurrent", &["Flow"], F::ReactiveStreams),
    R::package("java.util.concurrent.Flow", F::ReactiveStreams),
    R::types("java.lang", &["StackWalker"], F::StackWalking),
    // 11
    R::package("java.net.http", F::HttpClient),
    R::types(
        "java.net.http",
        &["HttpClient", "HttpRequest", "HttpResponse", "WebSocket"],
        F::HttpClient,
    ),
    R::package("jdk.jfr", F::FlightRecorder),
    R::types(
        "jdk.jfr",
        &[
            "FlightRecorder", "Event", "Recording", "RecordingState", "Configuration",
            "EventType", "ValueDescriptor",
        ],
        F::FlightRecorder,
    ),
    // 12
    R::types("java.text", &["CompactNumberFormat"], F::CompactNumberFormat),
    // 15
    R::types("java.lang.invoke", &["MethodHandles"], F::HiddenClasses),
    R::types(
        "java.security.spec",
        &["EdECPublicKeySpec", "EdECPrivateKeySpec", "EdECPoint", "NamedParameterSpec"],
        F::EdDsa,
    ),
    R::types(
        "java.security.interfaces",
        &["EdECKey", "EdECPublicKey", "EdECPrivateKey"],
        F::EdDsa,
    ),
    // 16
    R::types("java.net", &["UnixDomainSocketAddress"], F::UnixDomainSockets),
    R::types(
        "java.nio.channels",
        &["SocketChannel", "ServerSocketChannel"],
        F::UnixDomainSockets,
    ),
    // 17
    R::package("java.util.random", F::RandomGenerator),
    R::types("java.util", &["HexFormat"], F::HexFormat),
    R::types("java.io", &["ObjectInputFilter"], F::DeserializationFilters),
    // 18
    R::package("com.sun.net.httpserver", F::SimpleWebServer),
    R::package("java.net.spi", F::InetAddressResolver),
    // 21
    R::types(
        "java.util",
        &["SequencedCollection", "SequencedSet", "SequencedMap"],
        F::SequencedCollections,
    ),
    R::types("javax.crypto", &["KEM"], F::KeyEncapsulation),
    R::package("javax.crypto.KEM", F::KeyEncapsulation),
    // 22
    R::package("java.lang.foreign", F::ForeignFunctionApi),
    // 24
    R::types("java.util.stream", &["Gatherer", "Gatherers"], F::StreamGatherers),
    R::package("java.lang.classfile", F::ClassFileApi),
    R::package("javax.crypto.kem", F::QuantumResistantKem),
    // 25
    R::types("java.lang", &["ScopedValue"], F::ScopedValues),
    R::package("javax.crypto.kdf", F::KeyDerivationApi),
    R::types("javax.crypto", &["KDF"], F::KeyDerivationApi),
];
