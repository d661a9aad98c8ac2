//! Randomness collaborators for the URL builder.
//!
//! Both traits are implemented for plain closures, so tests can pin the
//! output with `|| "seed".to_string()`.

use uuid::Uuid;

/// Produces the `seed` query value for category and video URLs.
pub trait SeedSource {
    /// A fresh seed.
    fn seed(&self) -> String;
}

/// Produces one lowercase word for the `text` query value.
pub trait WordSource {
    /// A fresh word.
    fn word(&self) -> String;
}

impl<F: Fn() -> String> SeedSource for F {
    fn seed(&self) -> String {
        self()
    }
}

impl<F: Fn() -> String> WordSource for F {
    fn word(&self) -> String {
        self()
    }
}

/// Version 4 UUIDs, lowercase and hyphenated (8-4-4-4-12).
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidSeeds;

impl SeedSource for UuidSeeds {
    fn seed(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

/// Words picked uniformly from the lorem ipsum vocabulary.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoremWords;

impl WordSource for LoremWords {
    fn word(&self) -> String {
        let index = rand::random_range(0..LOREM_WORDS.len());
        LOREM_WORDS[index].to_string()
    }
}

const LOREM_WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium",
    "doloremque", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis",
    "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur",
    "odit", "fugit", "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui",
    "ratione", "sequi", "nesciunt", "neque", "dolorem", "ipsum", "dolor", "amet",
    "consectetur", "adipisci", "velit", "non", "numquam", "eius", "modi", "tempora",
    "incidunt", "ut", "labore", "dolore", "magnam", "aliquam", "quaerat", "enim", "ad",
    "minima", "veniam", "quis", "nostrum", "exercitationem", "ullam", "corporis",
    "nemo", "ipsam", "voluptas", "suscipit", "laboriosam", "nisi", "aliquid", "ex", "ea",
    "commodi", "autem", "vel", "eum", "iure", "reprehenderit", "in", "voluptate", "esse",
    "quam", "nihil", "molestiae", "iusto", "odio", "dignissimos", "ducimus", "blanditiis",
    "praesentium", "laudantium", "totam", "rem", "voluptatum", "deleniti", "atque",
    "corrupti", "quos", "quas", "molestias", "excepturi", "sint", "occaecati",
    "cupiditate", "provident", "perspiciatis", "unde", "omnis", "iste", "natus", "error",
    "similique", "culpa", "officia", "deserunt", "mollitia", "animi", "id", "est",
    "laborum", "dolorum", "fuga", "harum", "quidem", "rerum", "facilis", "expedita",
    "distinctio", "nam", "libero", "tempore", "cum", "soluta", "nobis", "eligendi",
    "optio", "cumque", "impedit", "quo", "porro", "quisquam", "minus", "quod", "maxime",
    "placeat", "facere", "possimus", "assumenda", "repellendus", "temporibus",
    "quibusdam", "officiis", "debitis", "saepe", "eveniet", "voluptates", "repudiandae",
    "recusandae", "itaque", "earum", "hic", "tenetur", "a", "sapiente", "delectus",
    "reiciendis", "voluptatibus", "maiores", "doloribus", "asperiores", "repellat",
];
