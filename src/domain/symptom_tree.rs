//! The fixed triage tree: 18 questions over six themes, 19 diagnoses.
//!
//! Each theme is composed bottom-up: diagnoses first, then the questions
//! that lead to them, then the theme is hung off the question chain that
//! rules out the previous themes.

use tracing::instrument;

use crate::domain::arena::DecisionTree;
use crate::domain::builder::{Branch, TreeBuilder};
use crate::domain::entities::{DiagnosisRecord, Severity};

/// Progress bar denominator. Not derived from the tree
/// (whose longest path is 7 questions); see [`DecisionTree::depth`].
pub const ESTIMATED_TOTAL_QUESTIONS: usize = 6;

/// Question at the root of the tree.
pub const ROOT_QUESTION: &str =
    "Are you experiencing severe chest pain, difficulty breathing, or loss of consciousness?";

/// Build the reference symptom tree.
#[instrument(level = "debug")]
pub fn build_tree() -> DecisionTree {
    TreeBuilder::build(symptom_branch())
}

/// The reference tree as an owned [`Branch`].
pub fn symptom_branch() -> Branch {
    let emergency = Branch::diagnosis(DiagnosisRecord::new(
        "POTENTIAL MEDICAL EMERGENCY",
        Severity::Emergency,
        "You may be experiencing a life-threatening condition such as heart attack, stroke, or severe allergic reaction.",
        "DO NOT WAIT - Take immediate action",
        "Call emergency services (112) immediately",
        "RIGHT NOW - This is an emergency",
        "Regular health checkups, manage chronic conditions, know warning signs",
    ));

    let no_fever = Branch::question(
        "Are you experiencing persistent cough or congestion?",
        respiratory_branch(),
        Branch::question(
            "Are you experiencing stomach pain, nausea, or digestive issues?",
            digestive_branch(),
            Branch::question(
                "Are you experiencing headache?",
                headache_branch(),
                Branch::question(
                    "Are you experiencing muscle or joint pain?",
                    musculoskeletal_branch(),
                    wellness_branch(),
                ),
            ),
        ),
    );

    Branch::question(
        ROOT_QUESTION,
        emergency,
        Branch::question(
            "Do you have a fever (temperature above 38C)?",
            fever_branch(),
            no_fever,
        ),
    )
}

fn fever_branch() -> Branch {
    let meningitis = Branch::diagnosis(DiagnosisRecord::new(
        "POSSIBLE MENINGITIS OR SERIOUS INFECTION",
        Severity::Urgent,
        "These symptoms suggest a potentially serious infection affecting the brain or nervous system.",
        "Seek immediate medical attention - do not wait",
        "IV antibiotics or antivirals (hospital treatment required)",
        "Immediately - go to emergency room",
        "Stay up to date with vaccinations (meningococcal, pneumococcal)",
    ));

    let flu = Branch::diagnosis(DiagnosisRecord::new(
        "INFLUENZA (FLU)",
        Severity::Moderate,
        "You likely have the flu, a viral infection affecting the respiratory system. Most people recover within 1-2 weeks.",
        "Rest, drink plenty of fluids (water, warm soups), use a humidifier, gargle with salt water",
        "Acetaminophen (Tylenol) 500-1000mg every 6 hours OR Ibuprofen (Advil) 400mg every 6 hours for fever/pain. Antiviral medications (Tamiflu) if prescribed within 48 hours of symptom onset",
        "If fever persists beyond 5 days, difficulty breathing develops, or symptoms worsen",
        "Annual flu vaccination, frequent handwashing, avoid close contact with sick individuals",
    ));

    let bacterial = Branch::diagnosis(DiagnosisRecord::new(
        "POSSIBLE BACTERIAL INFECTION",
        Severity::Urgent,
        "Persistent fever may indicate a bacterial infection requiring antibiotics.",
        "Monitor temperature, stay hydrated, get plenty of rest",
        "See a doctor for evaluation - may need antibiotics like Amoxicillin or Azithromycin",
        "Within 24 hours - persistent fever needs medical evaluation",
        "Practice good hygiene, complete full course of antibiotics if prescribed",
    ));

    let viral = Branch::diagnosis(DiagnosisRecord::new(
        "COMMON VIRAL INFECTION",
        Severity::Mild,
        "You likely have a common viral infection. Your body is fighting off the virus naturally.",
        "Rest, drink 8-10 glasses of water daily, eat nutritious foods (fruits, vegetables, soup)",
        "Acetaminophen (Tylenol) 500mg every 6 hours OR Ibuprofen (Advil) 400mg every 6 hours. Do NOT combine both. Take with food",
        "If fever exceeds 39.4C, lasts more than 3 days, or you develop new symptoms",
        "Good nutrition, adequate sleep (7-9 hours), regular exercise, stress management",
    ));

    let long_fever = Branch::question(
        "Do you also have body aches, fatigue, and cough?",
        flu,
        bacterial,
    );

    Branch::question(
        "Is your fever accompanied by severe headache, stiff neck, or sensitivity to light?",
        meningitis,
        Branch::question(
            "Have you had the fever for more than 3 days?",
            long_fever,
            viral,
        ),
    )
}

fn respiratory_branch() -> Branch {
    let sinusitis = Branch::diagnosis(DiagnosisRecord::new(
        "SINUSITIS (SINUS INFECTION)",
        Severity::Moderate,
        "You likely have a sinus infection, which can be viral or bacterial. The thick, colored mucus and duration suggest possible bacterial sinusitis.",
        "Steam inhalation 2-3 times daily, nasal saline irrigation (Neti pot), warm compress on face, drink plenty of fluids, sleep with head elevated",
        "Decongestants: Pseudoephedrine (Sudafed) 30-60mg every 4-6 hours OR Phenylephrine (Sudafed PE) 10mg every 4 hours. Nasal spray: Fluticasone (Flonase) 2 sprays each nostril daily. Pain relief: Ibuprofen 400mg every 6 hours. If bacterial: doctor may prescribe Amoxicillin-Clavulanate",
        "If symptoms last more than 10 days, severe facial pain, vision changes, or high fever develops",
        "Use humidifier, avoid allergens and irritants, manage allergies, stay hydrated",
    ));

    let allergies = Branch::diagnosis(DiagnosisRecord::new(
        "ALLERGIC RHINITIS (ALLERGIES)",
        Severity::Mild,
        "You're experiencing allergic rhinitis, an allergic reaction to airborne substances like pollen, dust, or pet dander.",
        "Avoid triggers, keep windows closed during high pollen days, use HEPA air filters, shower after being outdoors, wash bedding weekly in hot water",
        "Antihistamines: Loratadine (Claritin) 10mg once daily OR Cetirizine (Zyrtec) 10mg once daily. Nasal spray: Fluticasone (Flonase) 2 sprays each nostril daily. Eye drops: Ketotifen (Zaditor) 1 drop each eye twice daily for itchy eyes",
        "If symptoms interfere with daily life, aren't controlled with OTC medications, or you want allergy testing",
        "Identify and avoid allergens, keep home clean, use air purifiers, consider allergy testing",
    ));

    let cold = Branch::diagnosis(DiagnosisRecord::new(
        "COMMON COLD",
        Severity::Mild,
        "You have a common cold, a viral upper respiratory infection. It typically resolves within 7-10 days.",
        "Rest 7-9 hours nightly, drink warm fluids (herbal tea, chicken soup), use humidifier, gargle with salt water (1/2 tsp salt in warm water), honey for cough (1-2 tsp)",
        "Pain/fever: Acetaminophen 500mg every 6 hours OR Ibuprofen 400mg every 6 hours. Cough: Dextromethorphan (Robitussin DM) 10-20mg every 4 hours OR Guaifenesin (Mucinex) 400mg every 4 hours for chest congestion. Nasal: Saline nasal spray as needed",
        "If symptoms worsen after 7 days, difficulty breathing, ear pain, or fever develops",
        "Frequent handwashing, avoid touching face, get adequate sleep, manage stress, eat nutritious diet",
    ));

    Branch::question(
        "Do you have thick yellow/green mucus or cough lasting more than 10 days?",
        sinusitis,
        Branch::question(
            "Do you have runny nose, sneezing, and itchy/watery eyes?",
            allergies,
            cold,
        ),
    )
}

fn digestive_branch() -> Branch {
    let severe_gi = Branch::diagnosis(DiagnosisRecord::new(
        "SEVERE GASTROENTERITIS (STOMACH FLU)",
        Severity::Urgent,
        "Prolonged vomiting/diarrhea can lead to dangerous dehydration requiring medical attention.",
        "Sip oral rehydration solution (ORS) frequently, avoid solid foods temporarily, rest",
        "Oral Rehydration Solution (Pedialyte or WHO-ORS), Ondansetron (prescription) for severe vomiting. Doctor may prescribe anti-diarrheal medications or IV fluids",
        "Within 24 hours - dehydration is serious and may require IV fluids",
        "Hand hygiene, food safety (proper cooking/storage), avoid contaminated water",
    ));

    let gastro = Branch::diagnosis(DiagnosisRecord::new(
        "VIRAL GASTROENTERITIS (STOMACH BUG)",
        Severity::Mild,
        "You have a stomach bug, typically caused by a virus. Most cases resolve within 24-48 hours.",
        "Clear fluids first (water, clear broth, electrolyte drinks), then BRAT diet (Bananas, Rice, Applesauce, Toast), small frequent meals, rest, avoid dairy/fatty/spicy foods for 48 hours",
        "Oral Rehydration Solution (Pedialyte, Gatorade) - drink 8oz every hour. For nausea: Bismuth subsalicylate (Pepto-Bismol) 524mg every 30-60 minutes up to 8 doses/day. For diarrhea: Loperamide (Imodium) 4mg initially, then 2mg after each loose stool (max 8mg/day)",
        "If symptoms persist beyond 48 hours, blood in stool, severe abdominal pain, signs of dehydration",
        "Wash hands frequently, avoid contaminated food/water, clean surfaces, stay home when sick",
    ));

    let gerd = Branch::diagnosis(DiagnosisRecord::new(
        "ACID REFLUX / GERD (GASTROESOPHAGEAL REFLUX DISEASE)",
        Severity::Mild,
        "Stomach acid flowing back into the esophagus causes heartburn. Lifestyle changes and medication can help.",
        "Eat smaller meals, avoid trigger foods (spicy, fatty, acidic), don't eat 3 hours before bed, elevate head of bed 6-8 inches, lose weight if overweight, avoid tight clothing",
        "Antacids: Tums or Rolaids (calcium carbonate) 500-1000mg as needed. H2 blockers: Famotidine (Pepcid) 20mg twice daily. Proton Pump Inhibitors: Omeprazole (Prilosec) 20mg once daily before breakfast (max 14 days without doctor consultation)",
        "If symptoms occur more than twice a week, difficulty swallowing, persistent symptoms despite treatment, or unexplained weight loss",
        "Maintain healthy weight, avoid trigger foods, eat smaller meals, quit smoking, limit alcohol",
    ));

    let indigestion = Branch::diagnosis(DiagnosisRecord::new(
        "INDIGESTION (DYSPEPSIA)",
        Severity::Mild,
        "Mild stomach discomfort, often related to eating or stress. Usually resolves on its own.",
        "Eat slowly, chew thoroughly, avoid large meals, reduce stress, avoid trigger foods (caffeine, alcohol, chocolate, spicy foods), stay upright after eating",
        "Antacids: Tums (calcium carbonate) 500-1000mg as needed OR Maalox (aluminum/magnesium hydroxide) 10-20ml as needed. Take 1 hour after meals and at bedtime. Simethicone (Gas-X) 125mg for gas/bloating",
        "If pain is severe, persists for several days, or you have unexplained weight loss",
        "Eat balanced diet, manage stress, exercise regularly, avoid overeating, identify food triggers",
    ));

    Branch::question(
        "Do you have diarrhea or vomiting?",
        Branch::question(
            "Have symptoms lasted more than 48 hours or do you have signs of dehydration (dark urine, dizziness)?",
            severe_gi,
            gastro,
        ),
        Branch::question(
            "Do you have heartburn or burning sensation in chest/throat?",
            gerd,
            indigestion,
        ),
    )
}

fn headache_branch() -> Branch {
    let severe_headache = Branch::diagnosis(DiagnosisRecord::new(
        "POSSIBLE SERIOUS HEADACHE CONDITION",
        Severity::Emergency,
        "Sudden severe headache or headache with neurological symptoms requires immediate evaluation to rule out serious conditions.",
        "Seek immediate medical attention",
        "Emergency room evaluation required - do not take medication before evaluation",
        "IMMEDIATELY - Go to emergency room or call 112",
        "Manage blood pressure, avoid triggers, regular health checkups",
    ));

    let migraine = Branch::diagnosis(DiagnosisRecord::new(
        "MIGRAINE HEADACHE",
        Severity::Moderate,
        "Migraines are intense headaches often with throbbing pain, nausea, and sensitivity to light/sound. They can last 4-72 hours.",
        "Rest in dark, quiet room; cold compress on forehead; stay hydrated; identify and avoid triggers (stress, certain foods, irregular sleep); gentle neck stretches; relaxation techniques",
        "Pain relief: Ibuprofen 400-600mg OR Naproxen 500mg at onset. Combination: Excedrin Migraine (acetaminophen + aspirin + caffeine) 2 tablets at onset. For frequent migraines, doctor may prescribe Sumatriptan (Imitrex) 50-100mg or preventive medications",
        "If migraines occur frequently (>4/month), don't respond to OTC medications, or significantly impact daily life - you may need prescription preventive medication",
        "Maintain regular sleep schedule, manage stress, stay hydrated, exercise regularly, identify food triggers, avoid skipping meals",
    ));

    let tension = Branch::diagnosis(DiagnosisRecord::new(
        "TENSION HEADACHE",
        Severity::Mild,
        "Most common type of headache, causing mild to moderate pain, often described as a tight band around the head. Usually related to stress or muscle tension.",
        "Rest, stress management, neck/shoulder stretches, warm compress on neck, massage temples, relaxation breathing exercises, good posture, take breaks from screens",
        "Acetaminophen (Tylenol) 500-1000mg OR Ibuprofen (Advil) 400-600mg OR Aspirin 500-1000mg. Can be taken every 6 hours as needed. Topical: Menthol cream on temples. Caffeine may help (1 cup of coffee)",
        "If headaches occur frequently (>15 days/month), interfere with daily activities, or change in pattern",
        "Manage stress, maintain good posture, regular exercise, adequate sleep, stay hydrated, take frequent breaks from computer work",
    ));

    Branch::question(
        "Is it a severe, sudden headache (worst of your life) or accompanied by vision changes?",
        severe_headache,
        Branch::question(
            "Is it a throbbing headache on one side, possibly with nausea or light sensitivity?",
            migraine,
            tension,
        ),
    )
}

fn musculoskeletal_branch() -> Branch {
    let strain = Branch::diagnosis(DiagnosisRecord::new(
        "MUSCLE STRAIN OR SPRAIN",
        Severity::Mild,
        "Overstretched or torn muscles/ligaments from injury or overuse. Usually heals within 1-2 weeks with proper care.",
        "RICE protocol: Rest (avoid painful activity), Ice (20 min every 2-3 hours for first 48-72 hours), Compression (elastic bandage), Elevation (above heart level). Gentle stretching after 48 hours",
        "Pain: Ibuprofen 400-600mg every 6 hours (better than acetaminophen for inflammation) OR Naproxen 500mg twice daily with food. Topical: Voltaren Gel (diclofenac) apply to affected area 4 times daily. Ice packs first 48 hours, then heat therapy",
        "If severe pain, inability to bear weight, significant swelling, numbness/tingling, or no improvement after 1 week",
        "Proper warm-up before exercise, gradual increase in activity, proper technique, adequate rest between workouts, maintain flexibility and strength",
    ));

    let body_aches = Branch::diagnosis(DiagnosisRecord::new(
        "GENERAL BODY ACHES (MYALGIA)",
        Severity::Mild,
        "Widespread muscle aches without specific injury, often from stress, tension, or minor viral infections.",
        "Gentle stretching, warm bath with Epsom salts (2 cups in bath), light massage, stay active with gentle movement, adequate sleep, stress management, stay hydrated (8-10 glasses water/day)",
        "Ibuprofen 400mg every 6 hours OR Acetaminophen 500-1000mg every 6 hours. Topical: Icy Hot or Bengay cream for localized relief. Magnesium supplement 300-400mg daily may help muscle relaxation",
        "If aches persist beyond 1 week, worsen, or accompanied by fever, rash, or other symptoms",
        "Regular exercise, good sleep hygiene, stress management, proper posture, stay hydrated, balanced diet with adequate protein",
    ));

    Branch::question(
        "Is the pain related to a recent injury or overuse?",
        strain,
        body_aches,
    )
}

fn wellness_branch() -> Branch {
    let fatigue = Branch::diagnosis(DiagnosisRecord::new(
        "GENERAL FATIGUE",
        Severity::Mild,
        "Persistent tiredness that doesn't improve with rest. Can be caused by stress, poor sleep, inadequate nutrition, or underlying conditions.",
        "Prioritize 7-9 hours quality sleep, regular sleep schedule, limit caffeine after 2pm, exercise 30 min daily (even walking), eat balanced meals with protein, stay hydrated, reduce stress, limit screen time before bed, take short breaks throughout day",
        "Address underlying causes first. Vitamin B-Complex supplement daily. Iron supplement if deficient (18mg daily for women, 8mg for men) - take with vitamin C for better absorption. Vitamin D3 2000 IU daily if deficient. Avoid energy drinks",
        "If fatigue persists despite lifestyle changes, worsens, or accompanied by other symptoms (weight changes, depression, shortness of breath) - may need blood tests for anemia, thyroid, or vitamin deficiencies",
        "Maintain consistent sleep schedule, balanced diet, regular exercise, stress management, limit alcohol, stay hydrated, take breaks from work",
    ));

    let general_wellness = Branch::diagnosis(DiagnosisRecord::new(
        "GENERAL WELLNESS CHECK",
        Severity::Mild,
        "You don't appear to have acute symptoms, but it's always good to maintain preventive health practices.",
        "Maintain healthy lifestyle: balanced diet rich in fruits/vegetables, regular exercise (150 min/week), adequate sleep (7-9 hours), stress management, stay hydrated, practice good hygiene",
        "Daily multivitamin can help fill nutritional gaps. Vitamin D3 2000 IU daily (especially if limited sun exposure). Omega-3 supplement for heart health",
        "Annual physical exam, age-appropriate screening tests, dental checkups twice yearly, vision exam yearly, any concerns about preventive health",
        "Healthy diet, regular exercise, adequate sleep, stress management, avoid smoking, limit alcohol, maintain social connections, regular health screenings",
    ));

    Branch::question(
        "Are you experiencing fatigue, weakness, or low energy?",
        fatigue,
        general_wellness,
    )
}
