//! Static arXiv category taxonomy served as markdown.

pub const TAXONOMY_MARKDOWN: &str = r#"# arXiv Category Taxonomy

Use these codes with the `cat:` field prefix (for example `cat:cs.AI`).
Archives without a subject class (such as `gr-qc`) are used as-is.

## Physics
*   **Astrophysics** (astro-ph): astro-ph.CO, astro-ph.EP, astro-ph.GA, astro-ph.HE, astro-ph.IM, astro-ph.SR
*   **Condensed Matter** (cond-mat): cond-mat.dis-nn, cond-mat.mes-hall, cond-mat.mtrl-sci, cond-mat.quant-gas, cond-mat.soft, cond-mat.stat-mech, cond-mat.str-el, cond-mat.supr-con
*   **General Relativity and Quantum Cosmology** (gr-qc)
*   **High Energy Physics** (hep-ex, hep-lat, hep-ph, hep-th)
*   **Mathematical Physics** (math-ph)
*   **Nonlinear Sciences** (nlin): nlin.AO, nlin.CD, nlin.CG, nlin.PS, nlin.SI
*   **Nuclear** (nucl-ex, nucl-th)
*   **Physics** (physics): physics.acc-ph, physics.optics, physics.comp-ph, physics.flu-dyn, physics.bio-ph, and more
*   **Quantum Physics** (quant-ph)

## Mathematics (math)
*   **Algebraic Geometry** (math.AG)
*   **Analysis of PDEs** (math.AP)
*   **Combinatorics** (math.CO)
*   **Number Theory** (math.NT)
*   **Optimization and Control** (math.OC)
*   **Probability** (math.PR)
*   **Statistics Theory** (math.ST)
*   ... and many more.

## Computer Science (cs)
*   **Artificial Intelligence** (cs.AI)
*   **Computation and Language** (cs.CL)
*   **Computational Complexity** (cs.CC)
*   **Computer Vision and Pattern Recognition** (cs.CV)
*   **Cryptography and Security** (cs.CR)
*   **Data Structures and Algorithms** (cs.DS)
*   **Databases** (cs.DB)
*   **Distributed, Parallel, and Cluster Computing** (cs.DC)
*   **Information Retrieval** (cs.IR)
*   **Machine Learning** (cs.LG)
*   **Programming Languages** (cs.PL)
*   **Robotics** (cs.RO)
*   **Software Engineering** (cs.SE)
*   ... and many more.

## Quantitative Biology (q-bio)
*   Biomolecules (q-bio.BM), Genomics (q-bio.GN), Neurons and Cognition (q-bio.NC), Populations and Evolution (q-bio.PE), etc.

## Quantitative Finance (q-fin)
*   Computational Finance (q-fin.CP), Economics (q-fin.EC), Portfolio Management (q-fin.PM), Statistical Finance (q-fin.ST), etc.

## Statistics (stat)
*   Applications (stat.AP), Computation (stat.CO), Machine Learning (stat.ML), Methodology (stat.ME), Theory (stat.TH)

## Electrical Engineering and Systems Science (eess)
*   Audio and Speech Processing (eess.AS), Image and Video Processing (eess.IV), Signal Processing (eess.SP), Systems and Control (eess.SY)

## Economics (econ)
*   Econometrics (econ.EM), General Economics (econ.GN), Theoretical Economics (econ.TH)
"#;
