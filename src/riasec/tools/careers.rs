use std::collections::BTreeMap;

use crate::riasec::tools::model::{CareerGroup, Dimension};

/// Builds the static career lookup table attached to every exported model.
/// One entry per dimension, each with a descriptive name and ten
/// representative career titles.
pub fn career_map() -> BTreeMap<Dimension, CareerGroup> {
    let mut map = BTreeMap::new();

    map.insert(
        Dimension::R,
        group(
            "Realistic",
            "Practical, hands-on, mechanical",
            &[
                "Mechanical Engineer",
                "Electrician",
                "Carpenter",
                "Pilot",
                "Automotive Technician",
                "Civil Engineer",
                "Architect",
                "Agricultural Engineer",
                "Construction Manager",
                "Surveyor",
            ],
        ),
    );

    map.insert(
        Dimension::I,
        group(
            "Investigative",
            "Analytical, scientific, research-oriented",
            &[
                "Data Scientist",
                "Research Scientist",
                "Software Engineer",
                "Doctor",
                "Pharmacist",
                "Laboratory Technician",
                "Statistician",
                "Biologist",
                "Chemist",
                "Physicist",
            ],
        ),
    );

    map.insert(
        Dimension::A,
        group(
            "Artistic",
            "Creative, expressive, innovative",
            &[
                "Graphic Designer",
                "Writer",
                "Musician",
                "Artist",
                "Interior Designer",
                "Fashion Designer",
                "Photographer",
                "Film Director",
                "Art Therapist",
                "Creative Director",
            ],
        ),
    );

    map.insert(
        Dimension::S,
        group(
            "Social",
            "Helping, teaching, caring for others",
            &[
                "Teacher",
                "Counselor",
                "Social Worker",
                "Nurse",
                "Therapist",
                "Human Resources Manager",
                "Community Worker",
                "Psychologist",
                "Rehabilitation Counselor",
                "School Principal",
            ],
        ),
    );

    map.insert(
        Dimension::E,
        group(
            "Enterprising",
            "Leading, persuading, managing",
            &[
                "Business Manager",
                "Sales Representative",
                "Entrepreneur",
                "Marketing Manager",
                "Lawyer",
                "Real Estate Agent",
                "Financial Advisor",
                "Project Manager",
                "CEO",
                "Politician",
            ],
        ),
    );

    map.insert(
        Dimension::C,
        group(
            "Conventional",
            "Organizing, detail-oriented, systematic",
            &[
                "Accountant",
                "Bookkeeper",
                "Administrative Assistant",
                "Bank Teller",
                "Data Entry Clerk",
                "Office Manager",
                "Auditor",
                "Tax Preparer",
                "Secretary",
                "Librarian",
            ],
        ),
    );

    map
}

fn group(name: &str, description: &str, careers: &[&str]) -> CareerGroup {
    CareerGroup {
        name: name.to_string(),
        description: description.to_string(),
        careers: careers.iter().map(|career| career.to_string()).collect(),
    }
}
