//! Word lists for British (en-GB) fake data.

/// Static data backing a [`Faker`](super::faker::Faker).
///
/// Lists are plain slices so alternative locales can be declared as
/// `static` values without allocation.
#[derive(Debug)]
pub struct Locale {
    pub code: &'static str,
    pub country: &'static str,
    pub male_titles: &'static [&'static str],
    pub female_titles: &'static [&'static str],
    pub male_first_names: &'static [&'static str],
    pub female_first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub street_names: &'static [&'static str],
    pub street_suffixes: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub postcode_areas: &'static [&'static str],
    pub email_domains: &'static [&'static str],
    pub landline_formats: &'static [&'static str],
    pub mobile_formats: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
}

/// Letters allowed in the inward part of a UK postcode.
pub const POSTCODE_INWARD_LETTERS: &[u8] = b"ABDEFGHJLNPQRSTUWXYZ";

pub static EN_GB: Locale = Locale {
    code: "en_GB",
    country: "GB",
    male_titles: &["Mr", "Mr", "Mr", "Dr"],
    female_titles: &["Mrs", "Ms", "Miss", "Dr"],
    male_first_names: &[
        "Oliver", "George", "Harry", "Jack", "Jacob", "Noah", "Charlie", "Thomas", "Oscar",
        "William", "James", "Henry", "Leo", "Alfie", "Joshua", "Freddie", "Archie", "Ethan",
        "Isaac", "Alexander", "Joseph", "Edward", "Samuel", "Max", "Daniel", "Arthur", "Lucas",
        "Mohammed", "Logan", "Theo", "Harrison", "Benjamin", "Dylan", "Adam", "Ryan", "Callum",
        "Lewis", "Connor", "Kieran", "Gareth", "Ian", "Stephen", "Paul", "Mark", "Andrew",
    ],
    female_first_names: &[
        "Olivia", "Amelia", "Isla", "Ava", "Emily", "Isabella", "Mia", "Poppy", "Ella", "Lily",
        "Sophia", "Grace", "Evie", "Sophie", "Ruby", "Charlotte", "Jessica", "Freya", "Chloe",
        "Daisy", "Phoebe", "Scarlett", "Lucy", "Florence", "Alice", "Matilda", "Millie",
        "Eleanor", "Holly", "Megan", "Rebecca", "Hannah", "Bethany", "Zoe", "Katie", "Abigail",
        "Gemma", "Rachel", "Joanne", "Kirsty", "Siobhan", "Fiona", "Claire", "Helen", "Sarah",
    ],
    last_names: &[
        "Smith", "Jones", "Williams", "Taylor", "Brown", "Davies", "Evans", "Wilson", "Thomas",
        "Johnson", "Roberts", "Robinson", "Thompson", "Wright", "Walker", "White", "Edwards",
        "Hughes", "Green", "Hall", "Lewis", "Harris", "Clarke", "Patel", "Jackson", "Wood",
        "Turner", "Martin", "Cooper", "Hill", "Ward", "Morris", "Moore", "Clark", "Lee", "King",
        "Baker", "Harrison", "Morgan", "Allen", "James", "Scott", "Phillips", "Watson", "Davis",
        "Parker", "Price", "Bennett", "Young", "Griffiths", "Mitchell", "Kelly", "Cook",
        "Carter", "Richardson", "Bailey", "Collins", "Bell", "Shaw", "Murphy", "Miller",
        "Cox", "Richards", "Khan", "Marshall", "Anderson", "Simpson", "Ellis", "Adams",
        "Singh", "Begum", "Wilkinson", "Foster", "Chapman", "Powell", "Webb", "Rogers", "Gray",
        "Mason", "Ali", "Hunt", "Hussain", "Campbell", "Matthews", "Owen", "Palmer", "Holmes",
    ],
    street_names: &[
        "High", "Station", "Main", "Park", "Church", "London", "Victoria", "Green", "Manor",
        "Kings", "Queens", "Grange", "Mill", "Springfield", "George", "Albert", "North",
        "South", "West", "New", "School", "Windsor", "York", "Highfield", "Alexandra",
        "Chester", "Orchard", "Meadow", "Elm", "Oak", "Cedar", "Willow", "Beech", "Ash",
        "Chapel", "Bridge", "Mount", "Castle", "Abbey", "Market",
    ],
    street_suffixes: &[
        "Street", "Road", "Lane", "Avenue", "Close", "Drive", "Way", "Gardens", "Crescent",
        "Grove", "Place", "Terrace", "Court", "Hill", "View", "Row", "Square", "Mews",
    ],
    cities: &[
        "London", "Birmingham", "Manchester", "Leeds", "Liverpool", "Sheffield", "Bristol",
        "Newcastle upon Tyne", "Nottingham", "Leicester", "Coventry", "Bradford", "Glasgow",
        "Edinburgh", "Aberdeen", "Dundee", "Cardiff", "Swansea", "Newport", "Belfast",
        "Derry", "Southampton", "Portsmouth", "Brighton", "Plymouth", "Reading", "Oxford",
        "Cambridge", "Norwich", "York", "Exeter", "Bath", "Hull", "Stoke-on-Trent",
        "Wolverhampton", "Derby", "Sunderland", "Preston", "Milton Keynes", "Peterborough",
    ],
    postcode_areas: &[
        "AB", "B", "BA", "BD", "BN", "BS", "CB", "CF", "CV", "DE", "DN", "E", "EC", "EH", "EX",
        "G", "GL", "HU", "L", "LE", "LS", "M", "MK", "N", "NE", "NG", "NR", "NW", "OX", "PE",
        "PL", "PO", "PR", "RG", "S", "SA", "SE", "SO", "SR", "ST", "SW", "W", "WC", "WV", "YO",
    ],
    email_domains: &[
        "gmail.com", "yahoo.co.uk", "hotmail.co.uk", "outlook.com", "btinternet.com",
        "sky.com", "example.co.uk", "example.org",
    ],
    landline_formats: &[
        "020 #### ####",
        "0121 ### ####",
        "0161 ### ####",
        "0113 ### ####",
        "0131 ### ####",
        "029 #### ####",
        "01632 ######",
        "+44(0)20 #### ####",
        "+44(0)1632 ######",
    ],
    mobile_formats: &["07700 ######", "07### ######", "+44(0)7700 ######", "+447#########"],
    company_suffixes: &["Ltd", "PLC", "LLP", "Group", "and Sons", "Holdings Ltd"],
};
