//! Static skill catalog: canonical skill names, categories, and aliases

use std::collections::HashMap;
use std::sync::OnceLock;

/// Skill categories and their canonical entries. A skill may appear in more
/// than one category; `SkillCatalog` deduplicates on load.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "C", "Go", "Rust", "Ruby",
            "PHP", "Swift", "Kotlin", "Scala", "R", "MATLAB", "Julia", "SQL", "HTML", "CSS",
            "Shell", "Bash", "PowerShell", "Perl", "Objective-C", "Dart", "Elixir", "Haskell",
            "Clojure", "F#", "VBA", "Groovy", "Lua",
        ],
    ),
    (
        "ml_frameworks",
        &[
            "TensorFlow", "PyTorch", "Keras", "scikit-learn", "XGBoost", "LightGBM", "CatBoost",
            "Hugging Face", "Transformers", "OpenCV", "NLTK", "spaCy", "Gensim", "FastAI",
            "MXNet", "Caffe", "Theano", "JAX", "PaddlePaddle", "ONNX", "MLflow",
            "Weights & Biases", "Neptune", "Comet",
        ],
    ),
    (
        "data_tools",
        &[
            "Pandas", "NumPy", "Spark", "Hadoop", "Hive", "Kafka", "Airflow", "Tableau",
            "Power BI", "Excel", "Jupyter", "Databricks", "Snowflake", "Dask", "Polars",
            "Prefect", "Luigi", "Apache Beam", "Flink", "Storm", "SAS", "SPSS", "Looker",
            "Qlik", "Alteryx", "Talend",
        ],
    ),
    (
        "cloud_platforms",
        &[
            "AWS", "Azure", "GCP", "Google Cloud", "Heroku", "DigitalOcean", "Alibaba Cloud",
            "IBM Cloud", "Oracle Cloud", "Salesforce", "CloudFlare", "Vercel", "Netlify",
            "AWS Lambda", "AWS S3", "AWS EC2", "AWS RDS", "AWS EMR", "Azure ML",
            "Google BigQuery", "Redshift", "Athena",
        ],
    ),
    (
        "databases",
        &[
            "MySQL", "PostgreSQL", "MongoDB", "Redis", "Cassandra", "DynamoDB", "SQLite",
            "Oracle", "SQL Server", "Elasticsearch", "Neo4j", "MariaDB", "CouchDB", "Firebase",
            "Supabase", "InfluxDB", "TimescaleDB", "Memcached", "RocksDB", "HBase", "Couchbase",
            "ArangoDB", "RethinkDB",
        ],
    ),
    (
        "devops_tools",
        &[
            "Docker", "Kubernetes", "Jenkins", "Git", "GitHub", "GitLab", "CI/CD", "Terraform",
            "Ansible", "Prometheus", "Grafana", "CircleCI", "Travis CI", "GitHub Actions",
            "ArgoCD", "Helm", "Vagrant", "Puppet", "Chef", "Nagios", "Datadog", "New Relic",
            "Splunk", "ELK Stack", "Istio",
        ],
    ),
    (
        "web_frameworks",
        &[
            "React", "Vue", "Angular", "Django", "Flask", "FastAPI", "Node.js", "Express",
            "Spring", "ASP.NET", "Ruby on Rails", "Next.js", "Svelte", "Laravel", "Symfony",
            "Nuxt.js", "NestJS", "Gatsby", "Remix", "SvelteKit", "Solid.js", "jQuery",
            "Bootstrap", "Tailwind CSS", "Material UI",
        ],
    ),
    (
        "testing_tools",
        &[
            "Jest", "Pytest", "Selenium", "Cypress", "JUnit", "Mocha", "Chai", "Jasmine",
            "TestNG", "Cucumber", "Postman", "SoapUI", "JMeter", "LoadRunner", "unittest",
            "Robot Framework", "Playwright", "Appium",
        ],
    ),
    (
        "mobile_frameworks",
        &[
            "React Native", "Flutter", "Swift", "SwiftUI", "Kotlin", "Xamarin", "Ionic",
            "Cordova", "Android Studio", "Xcode",
        ],
    ),
    (
        "collaboration_tools",
        &[
            "Git", "GitHub", "GitLab", "Bitbucket", "SVN", "Jira", "Confluence", "Trello",
            "Asana", "Slack", "Teams", "Notion", "Linear",
        ],
    ),
    (
        "technical_concepts",
        &[
            "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "Data Analysis",
            "Statistical Modeling", "A/B Testing", "ETL", "RESTful API", "GraphQL",
            "Microservices", "Agile", "Scrum", "Kanban", "DevOps", "MLOps",
            "Data Visualization", "Big Data", "Business Intelligence", "Data Engineering",
            "Data Warehousing", "Data Mining", "Time Series Analysis", "Recommendation Systems",
            "Natural Language Processing", "Image Processing", "Reinforcement Learning",
            "Transfer Learning", "Neural Networks", "Convolutional Neural Networks",
            "Recurrent Neural Networks", "Transformer Models", "Object-Oriented Programming",
            "Functional Programming", "Algorithm Design", "Data Structures", "System Design",
            "Distributed Systems", "Cloud Computing", "Edge Computing", "API Development",
            "Web Scraping", "Data Pipelines", "Feature Engineering", "Model Deployment",
            "Model Monitoring", "Experiment Design", "Hypothesis Testing", "Regression Analysis",
            "Classification", "Clustering", "Dimensionality Reduction", "Ensemble Methods",
            "Gradient Boosting", "Random Forest", "Support Vector Machines", "Decision Trees",
            "K-Means", "Principal Component Analysis", "Cross Validation",
        ],
    ),
    (
        "specialized_skills",
        &[
            "FAISS", "Pinecone", "Weaviate", "ChromaDB", "LangChain", "LlamaIndex", "RAG",
            "Vector Search", "Embeddings", "BERT", "GPT", "T5", "LLaMA", "Claude",
            "Stable Diffusion", "DALL-E", "Whisper", "SAM", "Segment Anything", "YOLO",
            "ResNet", "VGG", "Blockchain", "Smart Contracts", "Web3", "Solidity",
            "Cryptography", "Cybersecurity", "Penetration Testing", "Network Security",
            "Information Security",
        ],
    ),
];

/// Abbreviation and synonym table, lowercase token to canonical name.
const SKILL_ALIASES: &[(&str, &str)] = &[
    // Programming languages
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("py", "Python"),
    ("cpp", "C++"),
    ("c++", "C++"),
    ("csharp", "C#"),
    ("c#", "C#"),
    ("golang", "Go"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    // ML frameworks
    ("tf", "TensorFlow"),
    ("tensorflow", "TensorFlow"),
    ("torch", "PyTorch"),
    ("pytorch", "PyTorch"),
    ("sklearn", "scikit-learn"),
    ("scikit", "scikit-learn"),
    ("hf", "Hugging Face"),
    ("huggingface", "Hugging Face"),
    // Cloud platforms
    ("aws", "AWS"),
    ("amazon web services", "AWS"),
    ("gcp", "GCP"),
    ("google cloud platform", "GCP"),
    ("azure", "Azure"),
    ("microsoft azure", "Azure"),
    // Concepts
    ("ml", "Machine Learning"),
    ("machine learning", "Machine Learning"),
    ("dl", "Deep Learning"),
    ("deep learning", "Deep Learning"),
    ("cv", "Computer Vision"),
    ("computer vision", "Computer Vision"),
    ("nlp", "NLP"),
    ("natural language processing", "NLP"),
    ("ai", "Machine Learning"),
    ("artificial intelligence", "Machine Learning"),
    // Databases
    ("postgres", "PostgreSQL"),
    ("postgresql", "PostgreSQL"),
    ("mongo", "MongoDB"),
    ("mongodb", "MongoDB"),
    ("mysql", "MySQL"),
    // DevOps
    ("k8s", "Kubernetes"),
    ("kubernetes", "Kubernetes"),
    ("cicd", "CI/CD"),
    ("ci/cd", "CI/CD"),
    // Other
    ("api", "RESTful API"),
    ("rest api", "RESTful API"),
    ("restful", "RESTful API"),
    ("bi", "Business Intelligence"),
    ("business intelligence", "Business Intelligence"),
    ("etl", "ETL"),
    ("cnn", "Convolutional Neural Networks"),
    ("rnn", "Recurrent Neural Networks"),
    ("oop", "Object-Oriented Programming"),
    ("fp", "Functional Programming"),
    ("pca", "Principal Component Analysis"),
    ("svm", "Support Vector Machines"),
    ("rf", "Random Forest"),
    ("gb", "Gradient Boosting"),
    ("xgb", "XGBoost"),
    ("lgbm", "LightGBM"),
];

/// Immutable catalog of canonical skills. Loaded once per process via
/// [`SkillCatalog::global`] and never mutated afterwards; callers that need
/// a custom skill list build a local extractor instead.
pub struct SkillCatalog {
    skills: Vec<String>,
    canonical_by_lower: HashMap<String, &'static str>,
    aliases: HashMap<&'static str, &'static str>,
}

impl SkillCatalog {
    /// The process-wide catalog, built lazily on first use.
    pub fn global() -> &'static SkillCatalog {
        static CATALOG: OnceLock<SkillCatalog> = OnceLock::new();
        CATALOG.get_or_init(SkillCatalog::build)
    }

    fn build() -> Self {
        let mut skills = Vec::new();
        let mut canonical_by_lower: HashMap<String, &'static str> = HashMap::new();

        for (_, entries) in SKILL_CATEGORIES {
            for skill in *entries {
                // First occurrence wins; later duplicates (e.g. Git in both
                // devops_tools and collaboration_tools) are dropped.
                if !canonical_by_lower.contains_key(&skill.to_lowercase()) {
                    canonical_by_lower.insert(skill.to_lowercase(), skill);
                    skills.push((*skill).to_string());
                }
            }
        }

        let aliases = SKILL_ALIASES.iter().copied().collect();

        Self {
            skills,
            canonical_by_lower,
            aliases,
        }
    }

    /// All canonical skill names in stable category order, deduplicated.
    pub fn all_skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Normalize a free-form token to its canonical skill name.
    ///
    /// Resolution order: alias table, then case-insensitive canonical
    /// lookup, then a title-cased copy of the input. Never fails.
    pub fn normalize(&self, token: &str) -> String {
        let trimmed = token.trim();
        let lower = trimmed.to_lowercase();

        if let Some(canonical) = self.aliases.get(lower.as_str()) {
            return (*canonical).to_string();
        }
        if let Some(canonical) = self.canonical_by_lower.get(&lower) {
            return (*canonical).to_string();
        }
        title_case(trimmed)
    }

    /// Skills belonging to a category; unknown categories yield an empty
    /// list rather than an error.
    pub fn skills_by_category(&self, category: &str) -> Vec<String> {
        SKILL_CATEGORIES
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, entries)| entries.iter().map(|s| (*s).to_string()).collect())
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<&'static str> {
        SKILL_CATEGORIES.iter().map(|(name, _)| *name).collect()
    }

    /// True if the token is a known skill or alias, case-insensitive.
    pub fn is_valid_skill(&self, token: &str) -> bool {
        let lower = token.trim().to_lowercase();
        self.aliases.contains_key(lower.as_str()) || self.canonical_by_lower.contains_key(&lower)
    }

    /// Case-insensitive substring search over canonical skill names.
    pub fn search(&self, query: &str) -> Vec<String> {
        let query_lower = query.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| skill.to_lowercase().contains(&query_lower))
            .cloned()
            .collect()
    }
}

/// Title-case each word of a string, leaving non-alphabetic runs alone.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
