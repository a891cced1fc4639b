//! Static reference lists used for affiliation classification
//!
//! Curated lists of company names and keywords, all lower-case. They are
//! compiled into the binary and shared read-only; the classifier never
//! mutates them, so concurrent use needs no synchronization.

/// Known pharmaceutical companies and brands
pub const PHARMA_COMPANIES: &[&str] = &[
    // Big pharma
    "pfizer",
    "johnson & johnson",
    "roche",
    "novartis",
    "merck",
    "abbvie",
    "bristol-myers squibb",
    "bms",
    "astrazeneca",
    "glaxosmithkline",
    "gsk",
    "sanofi",
    "takeda",
    "boehringer ingelheim",
    "eli lilly",
    "lilly",
    "amgen",
    "gilead",
    "biogen",
    "celgene",
    "regeneron",
    "vertex",
    "alexion",
    "incyte",
    "shire",
    "allergan",
    "teva",
    "mylan",
    "viatris",
    "sandoz",
    "hospira",
    "actavis",
    "watson",
    // European and other international
    "bayer",
    "servier",
    "actelion",
    "endo",
    "mallinckrodt",
    "purdue pharma",
    "otsuka",
    "daiichi sankyo",
    "eisai",
    "astellas",
    "chugai",
    "sumitomo",
    "sumitomo dainippon",
    "kyowa kirin",
    "mitsubishi tanabe",
    "shionogi",
    "ono pharmaceutical",
    "ono",
    "ajinomoto",
    "fujifilm",
    "teijin",
    "asahi kasei",
    "recordati",
    "almirall",
    "ipsen",
    "pierre fabre",
    "ucb",
    "lundbeck",
    "novo nordisk",
    "leo pharma",
    "ferring",
    "nycomed",
    "gedeon richter",
    "krka",
    "hexal",
    "stada",
    "ratiopharm",
    "zentiva",
    "egis",
    "pliva",
    // Indian generics and CDMOs
    "dr. reddy",
    "sun pharma",
    "lupin",
    "cipla",
    "aurobindo",
    "zydus",
    "torrent",
    "cadila",
    "biocon",
    "wockhardt",
    "glenmark",
    "alkem",
    "mankind",
    "intas",
    "hetero",
    "natco",
    "divis",
    "laurus",
    "granules",
    "suven",
    "dishman",
    "piramal",
    "jubilant",
    "syngene",
    "neuland",
    // Chinese companies
    "sinopharm",
    "jiangsu hengrui",
    "beigene",
    "wuxi biologics",
    "wuxi apptec",
    "hansoh",
    "innovent",
    "junshi",
    "henlius",
    "zaai",
    "genscript",
    "mindray",
    "shenzhen kangtai",
    "sinovac",
    "fosun pharma",
];

/// Known biotech companies
pub const BIOTECH_COMPANIES: &[&str] = &[
    // Major biotech
    "genentech",
    "moderna",
    "biontech",
    "illumina",
    "seagen",
    "seattle genetics",
    "bluebird bio",
    "crispr therapeutics",
    "editas",
    "intellia",
    "sangamo",
    "spark therapeutics",
    "biomarin",
    "sarepta",
    "ionis",
    "alnylam",
    "arrowhead",
    "dicerna",
    "silence therapeutics",
    "arcturus",
    "translate bio",
    "acuitas",
    "genevant",
    "precision nanosystems",
    "curevac",
    "ethris",
    "strand",
    "gritstone",
    "neon therapeutics",
    "personalis",
    "adaptive biotechnologies",
    // CAR-T and cell therapy
    "kite pharma",
    "kite",
    "juno therapeutics",
    "juno",
    "fate therapeutics",
    "legend biotech",
    "janssen",
    "autolus",
    "precision biosciences",
    "caribou biosciences",
    "allogene therapeutics",
    "celyad",
    "cellectis",
    "adaptimmune",
    "tcr2 therapeutics",
    "iovance",
    "cullinan oncology",
    "sorrento",
    "car-t",
    // Gene therapy and rare disease
    "uniqure",
    "voyager therapeutics",
    "regenxbio",
    "adverum",
    "nightstar",
    "meiragtx",
    "homology medicines",
    "logicbio",
    "audentes",
    "solid biosciences",
    "ultragenyx",
    "genzyme",
    "lysogene",
    "orchard therapeutics",
    "avrobio",
    "magenta therapeutics",
    "rocket pharmaceuticals",
    "amicus",
    "protalix",
    "pharming",
    "synageva",
    "vtesse",
    "leadiant",
    // Immunotherapy
    "immunomedics",
    "immunocore",
    "kymab",
    "repertoire immune medicines",
    "hookin",
    "puretech",
    "compass therapeutics",
    "pieris",
    "molecular templates",
    "sutro",
    "cue biopharma",
    "generon",
    "targovax",
    "bavarian nordic",
    "transgene",
    "psioxus",
    "oncolytics",
    "sillajen",
    "replimune",
    "istari oncology",
    "oncosec",
    "inovio",
    "advaxis",
    "heat biologics",
    "immune design",
    "agenus",
    "genocea",
    "selecta",
    "ziopharm",
    "intrexon",
    "precigen",
    // Microbiome and consumer genomics
    "synthetic biologics",
    "synlogic",
    "second genome",
    "seres",
    "vedanta",
    "rebiotix",
    "finch therapeutics",
    "enterome",
    "eligo bioscience",
    "locus biosciences",
    "osel",
    "symbiotix",
    "microbiome therapeutics",
    "microbiotica",
    "pendulum therapeutics",
    "seed health",
    "sun genomics",
    "viome",
    "thryve",
    "psomagen",
    "ubiome",
    "american gut",
    "british gut",
    "australian gut",
    "global gut",
];

/// Terms indicating an academic, government, or clinical institution.
/// Any hit here wins over a company-name match.
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "school",
    "institute",
    "hospital",
    "medical center",
    "research center",
    "laboratory",
    "lab",
    "department",
    "faculty",
    "academia",
    "academic",
    "educational",
    "clinic",
    "health system",
    "medical school",
    "dental school",
    "veterinary school",
    "pharmacy school",
    "nursing school",
    "public health",
    "research institute",
    "cancer center",
    "children's hospital",
    "veterans affairs",
    "va medical",
    "national institutes",
    "nih",
    "cdc",
    "fda",
    "government",
    "federal",
    "state university",
    "community college",
    "technical college",
    "seminary",
    "conservatory",
];

/// Generic terms indicating a for-profit pharma/biotech organization,
/// checked after the company lists
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "pharmaceutical",
    "pharmaceuticals",
    "pharma",
    "biotech",
    "biotechnology",
    "biopharmaceutical",
    "biopharma",
    "therapeutics",
    "medicines",
    "drug development",
    "clinical development",
    "r&d",
    "research and development",
    "life sciences",
    "biosciences",
    "medical affairs",
    "clinical research",
    "preclinical",
    "translational medicine",
    "drug discovery",
];
